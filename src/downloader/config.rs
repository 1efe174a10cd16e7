//! Configuration of the fetch step.

use crate::download::FilenamePolicy;
use crate::http::HttpClientConfig;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration structure for the downloader.
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Application-private directory where downloaded files are stored.
    pub directory: PathBuf,
    /// How the destination file name is derived.
    pub filename_policy: FilenamePolicy,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy.
    pub proxy: Option<reqwest::Proxy>,
    /// Honour the proxies configured in the environment.
    pub system_proxy: bool,
    /// Optional total request timeout.
    pub timeout: Option<Duration>,
}

impl DownloaderConfig {
    /// The HTTP client settings carried by this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            proxy: self.proxy.clone(),
            system_proxy: self.system_proxy,
            headers: self.headers.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            filename_policy: FilenamePolicy::default(),
            headers: None,
            proxy: None,
            system_proxy: true,
            timeout: None,
        }
    }
}
