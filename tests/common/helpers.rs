use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use fetch_and_open::{
    AppInfo, AppLauncher, Error, FetchAndOpenBuilder, FileProvider, Intent, Result,
};
use rand::RngCore;

pub const TEST_PACKAGE: &str = "com.example.app";
pub const TEST_USER_AGENT: &str = "fetch-and-open-test-agent";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates deterministic test content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates random test content of specified size
pub fn create_random_content(size: usize) -> Vec<u8> {
    let mut content = vec![0u8; size];
    rand::rng().fill_bytes(&mut content);
    content
}

/// Lists the files in a directory, empty if it does not exist
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    }
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read downloaded file");
    assert_eq!(content.len(), expected.len(), "File size mismatch at path: {:?}", path);
    assert!(content == expected, "File content mismatch at path: {:?}", path);
}

/// An [`AppLauncher`] standing in for the host's installed applications.
///
/// It records every launched intent so tests can check that nothing was
/// started when no handler resolves.
#[derive(Default)]
pub struct RecordingLauncher {
    /// Unconstrained view intents resolve.
    pub views: bool,
    /// Send intents resolve.
    pub sends: bool,
    /// Direct component launches resolve.
    pub components: bool,
    /// Packages a constrained view intent resolves to.
    pub packages: Vec<String>,
    launched: Mutex<Vec<Intent>>,
}

impl RecordingLauncher {
    /// Resolves every kind of intent except package-constrained views.
    pub fn everything() -> Self {
        Self {
            views: true,
            sends: true,
            components: true,
            ..Self::default()
        }
    }

    /// Resolves nothing.
    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: &str) -> Self {
        self.packages.push(package.to_string());
        self
    }

    pub fn launched(&self) -> Vec<Intent> {
        self.launched.lock().unwrap().clone()
    }
}

impl AppLauncher for RecordingLauncher {
    fn resolve(&self, intent: &Intent) -> Option<AppInfo> {
        let resolves = match intent.target() {
            Intent::View {
                package: Some(p), ..
            } => self.packages.contains(p),
            Intent::View { .. } => self.views,
            Intent::Send { .. } => self.sends,
            Intent::Component { .. } => self.components,
            Intent::Chooser { .. } => false,
        };
        resolves.then(|| AppInfo::new(intent.package().unwrap_or("test.viewer"), "Test Viewer"))
    }

    fn launch(&self, intent: &Intent) -> Result<AppInfo> {
        let app = self.resolve(intent).ok_or(Error::NoHandler)?;
        self.launched.lock().unwrap().push(intent.clone());
        Ok(app)
    }
}

/// A pipeline builder over `dir` using `launcher`, bypassing system proxies.
pub fn create_test_builder(dir: &Path, launcher: Arc<RecordingLauncher>) -> FetchAndOpenBuilder {
    let provider = Arc::new(FileProvider::for_package(TEST_PACKAGE, dir));
    create_test_builder_with(dir, launcher, provider)
}

/// Like [`create_test_builder`], sharing files through `provider`.
pub fn create_test_builder_with<L: AppLauncher + 'static>(
    dir: &Path,
    launcher: L,
    provider: Arc<FileProvider>,
) -> FetchAndOpenBuilder {
    FetchAndOpenBuilder::new(launcher, provider)
        .directory(dir.to_path_buf())
        .no_proxy()
}
