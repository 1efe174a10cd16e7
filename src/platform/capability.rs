//! Host capabilities the pipeline depends on.
//!
//! The pipeline never talks to the host environment directly. It asks an
//! [`AppLauncher`] to resolve and start intents and a [`SecureFileExposer`] to
//! turn a local path into a reference another application may read.

use crate::error::{Error, Result};
use crate::viewer::Intent;

use reqwest::Url;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// An installed application able to handle an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Package identifier.
    pub package: String,
    /// Human readable name.
    pub label: String,
}

impl AppInfo {
    pub fn new(package: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            label: label.into(),
        }
    }
}

/// A capability-scoped reference to a local file.
///
/// The reference is a `content://` URI. It names a grant held by the exposer,
/// never the path of the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileReference(Url);

impl FileReference {
    pub(crate) fn new(uri: Url) -> Self {
        Self(uri)
    }

    /// Parses a `content://` URI.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri)
            .map_err(|e| Error::Unexpected(format!("Invalid file reference {}: {}", uri, e)))?;
        if url.scheme() != "content" {
            return Err(Error::Unexpected(format!(
                "File reference {} is not a content uri",
                uri
            )));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Authority that minted the reference.
    pub fn authority(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves and launches intents against the installed applications.
pub trait AppLauncher: Send + Sync {
    /// The application that would handle `intent`, if any.
    fn resolve(&self, intent: &Intent) -> Option<AppInfo>;

    /// Launches `intent` and returns the application that received it.
    fn launch(&self, intent: &Intent) -> Result<AppInfo>;
}

/// Mints temporary read references to local files.
pub trait SecureFileExposer: Send + Sync {
    fn expose(&self, path: &Path) -> Result<FileReference>;

    /// Directory outside of which nothing can be exposed, if there is one.
    fn shared_root(&self) -> Option<&Path> {
        None
    }
}

impl<T: AppLauncher + ?Sized> AppLauncher for Arc<T> {
    fn resolve(&self, intent: &Intent) -> Option<AppInfo> {
        (**self).resolve(intent)
    }

    fn launch(&self, intent: &Intent) -> Result<AppInfo> {
        (**self).launch(intent)
    }
}

impl<T: SecureFileExposer + ?Sized> SecureFileExposer for Arc<T> {
    fn expose(&self, path: &Path) -> Result<FileReference> {
        (**self).expose(path)
    }

    fn shared_root(&self) -> Option<&Path> {
        (**self).shared_root()
    }
}
