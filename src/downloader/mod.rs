//! Fetching files onto local storage.
//!
//! - `downloader` - The [`Downloader`] that performs the GET and streams the body
//! - `config` - [`DownloaderConfig`] with its defaults
//! - `locks` - Serializes writers of the same destination file
//!
//! ```rust,no_run
//! use fetch_and_open::download::DownloadRequest;
//! use fetch_and_open::downloader::{Downloader, DownloaderConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new(DownloaderConfig {
//!     directory: PathBuf::from("./files"),
//!     ..DownloaderConfig::default()
//! })?;
//! let request = DownloadRequest::try_from("https://example.com/report.pdf")?;
//! let result = downloader.fetch(&request).await?;
//! println!("{} bytes in {:?}", result.size(), result.path());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod downloader;
mod locks;

pub use config::DownloaderConfig;
pub use downloader::Downloader;
