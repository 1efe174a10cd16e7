//! Configuration of the whole pipeline.

use crate::downloader::DownloaderConfig;
use crate::viewer::DispatchPolicy;

/// Configuration structure for [`FetchAndOpen`](super::FetchAndOpen).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where and how files are fetched.
    pub downloader: DownloaderConfig,
    /// How downloaded files are handed to a viewer.
    pub policy: DispatchPolicy,
}
