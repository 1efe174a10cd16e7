use super::kind::FileKind;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};

/// Represents a completed download on local storage.
#[derive(Debug, Clone)]
pub struct DownloadResult {
    /// Local file written.
    path: PathBuf,
    /// Classification of the source URL.
    kind: FileKind,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Bytes written to disk.
    size: u64,
}

impl DownloadResult {
    /// Create a new [`DownloadResult`].
    pub fn new(path: PathBuf, kind: FileKind, statuscode: StatusCode, size: u64) -> Self {
        Self {
            path,
            kind,
            statuscode,
            size,
        }
    }

    /// Get the local path of the downloaded file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file classification.
    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    /// Get the HTTP status of the response.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_getters() {
        let result = DownloadResult::new(
            PathBuf::from("/tmp/report.pdf"),
            FileKind::Pdf,
            StatusCode::OK,
            200,
        );

        assert_eq!(result.path(), Path::new("/tmp/report.pdf"));
        assert!(result.kind().is_pdf());
        assert_eq!(result.statuscode(), StatusCode::OK);
        assert_eq!(result.size(), 200);
    }
}
