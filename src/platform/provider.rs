//! A file provider handing out `content://` references.
//!
//! [`FileProvider::expose`] records a grant and returns a reference of the form
//! `content://<authority>/<grant>/<relative path>`. A path holds at most one
//! live grant: exposing it again hands back the same reference, so the table
//! never grows past the number of distinct files shared. Only files below the
//! provider's root can be exposed. The host resolves a reference back to its
//! path with [`FileProvider::resolve`] and can withdraw it with
//! [`FileProvider::revoke`].

use super::capability::{FileReference, SecureFileExposer};
use crate::error::{Error, Result};

use reqwest::Url;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Suffix appended to the host package name to form the default authority.
pub const FILE_PROVIDER_SUFFIX: &str = ".cdv.core.file.provider";

#[derive(Debug, Default)]
struct Grants {
    by_uri: HashMap<String, PathBuf>,
    by_path: HashMap<PathBuf, FileReference>,
}

#[derive(Debug)]
pub struct FileProvider {
    authority: String,
    root: PathBuf,
    grants: Mutex<Grants>,
    next_grant: AtomicU64,
}

impl FileProvider {
    pub fn new(authority: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            authority: authority.into(),
            root: root.into(),
            grants: Mutex::default(),
            next_grant: AtomicU64::new(0),
        }
    }

    /// Provider for `package`, using the conventional authority suffix.
    pub fn for_package(package: &str, root: impl Into<PathBuf>) -> Self {
        Self::new(format!("{}{}", package, FILE_PROVIDER_SUFFIX), root)
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path behind a live grant.
    pub fn resolve(&self, reference: &FileReference) -> Option<PathBuf> {
        self.grants()
            .by_uri
            .get(reference.as_str())
            .cloned()
    }

    /// Withdraws a grant. Returns whether it was live.
    pub fn revoke(&self, reference: &FileReference) -> bool {
        let mut grants = self.grants();
        match grants.by_uri.remove(reference.as_str()) {
            Some(path) => {
                grants.by_path.remove(&path);
                true
            }
            None => false,
        }
    }

    /// Number of live grants.
    pub fn live_grants(&self) -> usize {
        self.grants().by_uri.len()
    }

    fn grants(&self) -> std::sync::MutexGuard<'_, Grants> {
        self.grants.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn relative_segments<'a>(&self, path: &'a Path) -> Result<Vec<&'a str>> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            Error::Unexpected(format!(
                "{:?} is outside of the shared directory {:?}",
                path, self.root
            ))
        })?;

        relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str().ok_or_else(|| {
                    Error::Unexpected(format!("{:?} is not valid UTF-8", name))
                }),
                _ => Err(Error::Unexpected(format!(
                    "{:?} is not a plain path below {:?}",
                    path, self.root
                ))),
            })
            .collect()
    }
}

impl SecureFileExposer for FileProvider {
    fn expose(&self, path: &Path) -> Result<FileReference> {
        let segments = self.relative_segments(path)?;
        if segments.is_empty() {
            return Err(Error::Unexpected(format!("{:?} is not a file", path)));
        }

        let mut grants = self.grants();
        if let Some(reference) = grants.by_path.get(path) {
            debug!("Reusing {} for {:?}", reference, path);
            return Ok(reference.clone());
        }

        let mut uri = Url::parse(&format!("content://{}/", self.authority)).map_err(|e| {
            Error::Unexpected(format!("Invalid provider authority {}: {}", self.authority, e))
        })?;
        let grant = self.next_grant.fetch_add(1, Ordering::Relaxed);
        uri.path_segments_mut()
            .map_err(|_| Error::Unexpected(format!("Invalid provider authority {}", self.authority)))?
            .clear()
            .push(&grant.to_string())
            .extend(segments);

        let reference = FileReference::new(uri);
        debug!("Exposing {:?} as {}", path, reference);
        grants
            .by_uri
            .insert(reference.as_str().to_string(), path.to_path_buf());
        grants.by_path.insert(path.to_path_buf(), reference.clone());
        Ok(reference)
    }

    fn shared_root(&self) -> Option<&Path> {
        Some(&self.root)
    }
}
