//! Download requests.
//!
//! A [`DownloadRequest`] is built per call from the URL string received over
//! the bridge. It carries the parsed URL, the file name used on disk and the
//! [`FileKind`] classification, which is computed once here and never again.
//!
//! ```rust
//! use fetch_and_open::download::{DownloadRequest, FileKind, FilenamePolicy};
//!
//! let request = DownloadRequest::new("https://example.com/docs/report.pdf", FilenamePolicy::FromUrl)?;
//! assert_eq!(request.filename, "report.pdf");
//! assert_eq!(request.kind, FileKind::Pdf);
//!
//! let request = DownloadRequest::new("https://example.com/docs/report.pdf", FilenamePolicy::Fixed)?;
//! assert_eq!(request.filename, "downloaded.pdf");
//! # Ok::<(), fetch_and_open::Error>(())
//! ```

use super::kind::FileKind;
use crate::error::Error;

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::convert::TryFrom;

/// Stem of the file name used by [`FilenamePolicy::Fixed`] and as fallback.
pub const FIXED_FILENAME_STEM: &str = "downloaded";

/// How the destination file name is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilenamePolicy {
    /// Use the last path segment of the URL, decoded.
    #[default]
    FromUrl,
    /// Always use `downloaded` plus the detected extension.
    Fixed,
}

/// Represents a file to be fetched and opened.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
    /// Classification driving the dispatch branch.
    pub kind: FileKind,
}

impl DownloadRequest {
    /// Parses `url` and derives the destination file name with `policy`.
    pub fn new(url: &str, policy: FilenamePolicy) -> Result<Self, Error> {
        let url = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;
        Self::from_url(url, policy)
    }

    /// Builds a request from an already parsed URL.
    pub fn from_url(url: Url, policy: FilenamePolicy) -> Result<Self, Error> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" is not an http(s) url",
                url
            )));
        }

        let kind = FileKind::from_url(&url);
        let filename = match policy {
            FilenamePolicy::FromUrl => filename_from_url(&url).unwrap_or_else(|| fixed_filename(&kind)),
            FilenamePolicy::Fixed => fixed_filename(&kind),
        };

        Ok(Self {
            url,
            filename,
            kind,
        })
    }
}

impl TryFrom<&str> for DownloadRequest {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DownloadRequest::new(value, FilenamePolicy::default())
    }
}

/// `downloaded.<ext>`, or `downloaded` when the URL has no extension.
pub fn fixed_filename(kind: &FileKind) -> String {
    match kind.extension() {
        Some(ext) => format!("{}.{}", FIXED_FILENAME_STEM, ext),
        None => FIXED_FILENAME_STEM.to_string(),
    }
}

/// Decoded last path segment, made safe to join onto the download directory.
fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let name: String = decoded
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    match name.trim() {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
