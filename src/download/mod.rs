//! Download data model.
//!
//! Both entities here are transient: a [`DownloadRequest`] lives for one call,
//! a [`DownloadResult`] until the dispatch decision has been made. Only the
//! file they describe outlives them.
//!
//! - [`request`] - URL parsing and destination file name derivation
//! - [`kind`] - PDF versus everything else
//! - [`result`] - What was written and where
//!
//! # Examples
//!
//! ```rust
//! use fetch_and_open::download::{DownloadRequest, FileKind};
//! use std::convert::TryFrom;
//!
//! let request = DownloadRequest::try_from("https://example.com/data.csv")?;
//! assert_eq!(request.filename, "data.csv");
//! assert_eq!(request.kind, FileKind::Other(Some("csv".into())));
//! assert_eq!(request.kind.mime_type(), "application/octet-stream");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod kind;
pub mod request;
pub mod result;

pub use kind::{FileKind, OCTET_STREAM_MIME, PDF_MIME};
pub use request::{DownloadRequest, FilenamePolicy, FIXED_FILENAME_STEM};
pub use result::DownloadResult;
