//! The fetch step: one GET, streamed to one file.
//!
//! The response is only written to disk once the server has answered with a
//! success status, so a connection failure never leaves a file behind. Once
//! writing has started the file is not rolled back: a transfer that dies half
//! way leaves a truncated file at the destination.

use super::config::DownloaderConfig;
use super::locks::PathLocks;
use crate::download::{DownloadRequest, DownloadResult};
use crate::error::{Error, Result};
use crate::http::create_http_client;

use futures::stream::StreamExt;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Fetches files into the configured directory.
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
    client: ClientWithMiddleware,
    locks: Arc<PathLocks>,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub fn new(config: DownloaderConfig) -> Result<Self> {
        let client = create_http_client(config.http_client_config())
            .map_err(|e| Error::Unexpected(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            config,
            client,
            locks: Arc::default(),
        })
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Gets the configuration.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Fetches the file and writes it to disk.
    pub async fn fetch(&self, request: &DownloadRequest) -> Result<DownloadResult> {
        let output = self.config.directory.join(&request.filename);

        debug!("Fetching {}", &request.url);
        let res = self.client.get(request.url.as_str()).send().await?;
        let res = res.error_for_status()?;
        let status = res.status();

        let _guard = self.locks.lock(&output).await;

        debug!("Creating destination directory {:?}", &self.config.directory);
        fs::create_dir_all(&self.config.directory).await?;

        debug!("Saving file as {:?}", &output);
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&output)
            .await?;

        let mut size: u64 = 0;
        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            size += chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
        }
        file.flush().await?;

        debug!("Downloaded {} bytes to {:?}", size, &output);
        Ok(DownloadResult::new(output, request.kind.clone(), status, size))
    }
}
