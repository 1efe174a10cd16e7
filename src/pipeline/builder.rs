//! Builder for [`FetchAndOpen`] pipelines.
//!
//! [`FetchAndOpenBuilder`] takes the two host capabilities up front and
//! collects everything else through chainable setters, starting from
//! [`Config::default`]. [`FetchAndOpenBuilder::build`] validates the result
//! and creates the HTTP client.
//!
//! # Examples
//!
//! ## Desktop launcher
//!
//! ```rust
//! use fetch_and_open::pipeline::FetchAndOpenBuilder;
//! use fetch_and_open::platform::{AppEntry, CommandLauncher, FileProvider};
//! use fetch_and_open::viewer::Action;
//! use std::sync::Arc;
//!
//! let provider = Arc::new(FileProvider::for_package("com.example.app", "downloads"));
//! let launcher = CommandLauncher::new(provider.clone())
//!     .install(AppEntry::new("org.freedesktop.xdg-open", "xdg-open").handles(Action::Send, "*/*"));
//!
//! let pipeline = FetchAndOpenBuilder::new(launcher, provider)
//!     .directory("downloads/today".into())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Direct viewer with custom headers
//!
//! ```rust
//! use fetch_and_open::pipeline::FetchAndOpenBuilder;
//! use fetch_and_open::platform::{CommandLauncher, FileProvider};
//! use fetch_and_open::viewer::{ComponentName, DispatchPolicy, ViewerOptions};
//! use reqwest::header::{HeaderValue, USER_AGENT};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(FileProvider::for_package("com.example.app", "files"));
//! let pipeline = FetchAndOpenBuilder::new(CommandLauncher::new(provider.clone()), provider)
//!     .directory("files".into())
//!     .policy(DispatchPolicy::DirectViewer {
//!         component: ComponentName::new("com.viewer", "com.viewer.PdfActivity"),
//!         options: ViewerOptions { print: false, ..ViewerOptions::default() },
//!     })
//!     .header(USER_AGENT, HeaderValue::from_static("MyApp/1.0"))
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Mismatched directories
//!
//! The download directory must lie inside the exposer's root, otherwise no
//! download could ever be shared:
//!
//! ```rust
//! use fetch_and_open::pipeline::FetchAndOpenBuilder;
//! use fetch_and_open::platform::{CommandLauncher, FileProvider};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(FileProvider::for_package("com.example.app", "files"));
//! let result = FetchAndOpenBuilder::new(CommandLauncher::new(provider.clone()), provider)
//!     .directory("elsewhere".into())
//!     .build();
//! assert!(result.is_err());
//! ```

use super::{config::Config, fetch_and_open::FetchAndOpen};
use crate::download::FilenamePolicy;
use crate::error::{Error, Result};
use crate::platform::{AppLauncher, SecureFileExposer};
use crate::viewer::DispatchPolicy;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`FetchAndOpen`].
///
/// The launcher and the exposer are the two host capabilities every pipeline
/// needs, so they are taken up front. Everything else has a default.
pub struct FetchAndOpenBuilder {
    config: Config,
    launcher: Arc<dyn AppLauncher>,
    exposer: Arc<dyn SecureFileExposer>,
}

impl FetchAndOpenBuilder {
    /// Creates a builder with the default options.
    pub fn new<L, E>(launcher: L, exposer: E) -> Self
    where
        L: AppLauncher + 'static,
        E: SecureFileExposer + 'static,
    {
        Self {
            config: Config::default(),
            launcher: Arc::new(launcher),
            exposer: Arc::new(exposer),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the directory where to store the downloads.
    ///
    /// It has to be the exposer's root or a directory below it, since View
    /// and Send intents can only reference files under that root. [`build`]
    /// rejects any other directory.
    ///
    /// [`build`]: FetchAndOpenBuilder::build
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.downloader.directory = directory;
        self
    }

    /// Sets how destination file names are derived.
    pub fn filename_policy(mut self, policy: FilenamePolicy) -> Self {
        self.config.downloader.filename_policy = policy;
        self
    }

    /// Sets how downloaded files are dispatched.
    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Sets a proxy for every request.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.downloader.proxy = Some(proxy);
        self
    }

    /// Ignores proxies configured in the environment.
    pub fn no_proxy(mut self) -> Self {
        self.config.downloader.system_proxy = false;
        self
    }

    /// Sets a total request timeout. Without one a stalled transfer waits forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.downloader.timeout = Some(timeout);
        self
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.config.downloader.headers.take().unwrap_or_default();
        new.extend(headers);

        self.config.downloader.headers = Some(new);
        self
    }

    /// Add the http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.config.downloader.headers.take().unwrap_or_default();
        new.insert(name, value);

        self.config.downloader.headers = Some(new);
        self
    }

    /// Create the [`FetchAndOpen`] with the specified options.
    ///
    /// Fails when the download directory lies outside the exposer's root or
    /// when the HTTP client cannot be built.
    pub fn build(self) -> Result<FetchAndOpen> {
        let directory = &self.config.downloader.directory;
        if let Some(root) = self.exposer.shared_root() {
            if !directory.starts_with(root) {
                return Err(Error::Unexpected(format!(
                    "Download directory {:?} is outside of the shared directory {:?}",
                    directory, root
                )));
            }
        }
        FetchAndOpen::new(self.config, self.launcher, self.exposer)
    }
}
