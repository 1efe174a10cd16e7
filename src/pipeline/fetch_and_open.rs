//! Download-then-dispatch.
//!
//! One call runs the whole pipeline in order: parse the URL, fetch the file,
//! classify it, build the intent, resolve it and launch it. Every step is
//! sequential and nothing is kept between calls.
//!
//! ```rust,no_run
//! use fetch_and_open::pipeline::FetchAndOpenBuilder;
//! use fetch_and_open::platform::{AppEntry, CommandLauncher, FileProvider};
//! use fetch_and_open::viewer::Action;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = PathBuf::from("./files");
//! let provider = Arc::new(FileProvider::for_package("com.example.app", &directory));
//! let launcher = CommandLauncher::new(provider.clone())
//!     .install(AppEntry::new("org.gnome.Evince", "evince").handles(Action::View, "application/pdf"));
//!
//! let pipeline = FetchAndOpenBuilder::new(launcher, provider)
//!     .directory(directory)
//!     .build()?;
//! let outcome = pipeline.fetch_and_open("https://example.com/report.pdf").await?;
//! println!("opened with {}", outcome.app().label);
//! # Ok(())
//! # }
//! ```

use super::config::Config;
use crate::download::{DownloadRequest, DownloadResult};
use crate::downloader::Downloader;
use crate::error::{Error, Result};
use crate::platform::{AppInfo, AppLauncher, SecureFileExposer};
use crate::viewer::{DispatchPolicy, Intent};

use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct OpenOutcome {
    download: DownloadResult,
    intent: Intent,
    app: AppInfo,
}

impl OpenOutcome {
    /// The file written to disk.
    pub fn download(&self) -> &DownloadResult {
        &self.download
    }

    /// The intent that was launched.
    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// The application that received the intent.
    pub fn app(&self) -> &AppInfo {
        &self.app
    }
}

/// Fetches a file and opens it with an installed application.
#[derive(Clone)]
pub struct FetchAndOpen {
    downloader: Downloader,
    policy: DispatchPolicy,
    launcher: Arc<dyn AppLauncher>,
    exposer: Arc<dyn SecureFileExposer>,
}

impl fmt::Debug for FetchAndOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchAndOpen")
            .field("downloader", &self.downloader)
            .field("policy", &self.policy)
            .finish()
    }
}

impl FetchAndOpen {
    pub(crate) fn new(
        config: Config,
        launcher: Arc<dyn AppLauncher>,
        exposer: Arc<dyn SecureFileExposer>,
    ) -> Result<Self> {
        Ok(Self {
            downloader: Downloader::new(config.downloader)?,
            policy: config.policy,
            launcher,
            exposer,
        })
    }

    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    pub fn policy(&self) -> &DispatchPolicy {
        &self.policy
    }

    /// Runs the pipeline for `url`.
    pub async fn fetch_and_open(&self, url: &str) -> Result<OpenOutcome> {
        let result = self.run(url).await;
        if let Err(ref e) = result {
            error!("Failed to download or open {}: {}", url, e);
        }
        result
    }

    async fn run(&self, url: &str) -> Result<OpenOutcome> {
        let request = DownloadRequest::new(url, self.downloader.config().filename_policy)?;
        info!("Starting download for {}", request.url);

        let download = self.downloader.fetch(&request).await?;
        info!(
            "File downloaded successfully: {:?} ({} bytes)",
            download.path(),
            download.size()
        );

        let intent = self
            .policy
            .build_intent(&download, self.exposer.as_ref(), self.launcher.as_ref())?;

        if self.launcher.resolve(&intent).is_none() {
            return Err(Error::NoHandler);
        }
        let app = self.launcher.launch(&intent)?;
        debug!("Intent started with {}", app.package);

        Ok(OpenOutcome {
            download,
            intent,
            app,
        })
    }
}
