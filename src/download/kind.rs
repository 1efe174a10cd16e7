//! File classification by extension.

use reqwest::Url;

/// MIME type used for the PDF view branch.
pub const PDF_MIME: &str = "application/pdf";
/// MIME type used for the generic share branch.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Classification of a download, used only to pick the dispatch branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// The URL ends in `.pdf` (any case).
    Pdf,
    /// Anything else, with the lowercased extension when there is one.
    Other(Option<String>),
}

impl FileKind {
    /// Classifies a URL by the suffix after the last `.` of its last path segment.
    ///
    /// Query and fragment never take part in the classification.
    pub fn from_url(url: &Url) -> Self {
        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        Self::from_name(segment)
    }

    /// Classifies a bare file name.
    pub fn from_name(name: &str) -> Self {
        match extension_of(name) {
            Some(ext) if ext == "pdf" => FileKind::Pdf,
            other => FileKind::Other(other),
        }
    }

    /// Whether this is the PDF branch.
    pub fn is_pdf(&self) -> bool {
        matches!(self, FileKind::Pdf)
    }

    /// Lowercased extension, if any.
    pub fn extension(&self) -> Option<&str> {
        match self {
            FileKind::Pdf => Some("pdf"),
            FileKind::Other(ext) => ext.as_deref(),
        }
    }

    /// MIME type announced to the receiving application.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Pdf => PDF_MIME,
            FileKind::Other(_) => OCTET_STREAM_MIME,
        }
    }
}

/// Lowercased text after the last `.` of `name`, if non-empty.
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(url: &str) -> FileKind {
        FileKind::from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_pdf_any_case() {
        assert_eq!(kind("https://example.com/report.pdf"), FileKind::Pdf);
        assert_eq!(kind("https://example.com/a/b/REPORT.Pdf"), FileKind::Pdf);
    }

    #[test]
    fn test_other_extensions() {
        assert_eq!(
            kind("https://example.com/data.csv"),
            FileKind::Other(Some("csv".into()))
        );
        assert_eq!(
            kind("https://example.com/archive.pdf.zip"),
            FileKind::Other(Some("zip".into()))
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(kind("https://example.com/download"), FileKind::Other(None));
        assert_eq!(kind("https://example.com/"), FileKind::Other(None));
        assert_eq!(kind("https://example.com/name."), FileKind::Other(None));
    }

    #[test]
    fn test_query_is_ignored() {
        assert_eq!(kind("https://example.com/report.pdf?token=a.b"), FileKind::Pdf);
        assert_eq!(
            kind("https://example.com/report?format=.pdf"),
            FileKind::Other(None)
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(FileKind::Pdf.mime_type(), "application/pdf");
        assert_eq!(
            FileKind::Other(Some("csv".into())).mime_type(),
            "application/octet-stream"
        );
    }
}
