//! fetch-and-open downloads a file over HTTP(S) into application storage and
//! hands it to a document viewer or to an "open with" chooser.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fetch_and_open::{Action, AppEntry, CommandLauncher, Error, FetchAndOpenBuilder, FileProvider};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let directory = PathBuf::from("files");
//! let provider = Arc::new(FileProvider::for_package("com.example.app", &directory));
//! let launcher = CommandLauncher::new(provider.clone())
//!     .install(AppEntry::new("org.gnome.Evince", "evince").handles(Action::View, "application/pdf"));
//!
//! let pipeline = FetchAndOpenBuilder::new(launcher, provider)
//!     .directory(directory)
//!     .build()?;
//! pipeline.fetch_and_open("https://example.com/report.pdf").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`bridge`] - The `downloadFile` bridge action and its callback result
//! - [`pipeline`] - [`FetchAndOpen`], its builder and configuration
//! - [`download`] - Download requests, file classification and results
//! - [`downloader`] - Streaming a response body to disk
//! - [`viewer`] - Intents and the policies choosing them
//! - [`platform`] - Host capabilities: launching apps, exposing files
//! - [`http`] - HTTP client setup
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod bridge;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod platform;
pub mod viewer;

pub use bridge::{BridgeResult, Plugin, DOWNLOAD_FILE_ACTION};
pub use download::{DownloadRequest, DownloadResult, FileKind, FilenamePolicy};
pub use downloader::{Downloader, DownloaderConfig};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use pipeline::{Config, FetchAndOpen, FetchAndOpenBuilder, OpenOutcome};
pub use platform::{
    AppEntry, AppInfo, AppLauncher, CommandLauncher, FileProvider, FileReference,
    SecureFileExposer,
};
pub use viewer::{Action, ComponentName, DispatchPolicy, Intent, ViewerOptions};
