//! An [`AppLauncher`] for desktop hosts.
//!
//! Installed applications are described up front as [`AppEntry`] values: the
//! actions and MIME types they accept, the viewer components they ship and the
//! program to run. Launching spawns that program with the file path appended
//! and returns at once; the exit status is collected on the tokio runtime so
//! finished viewers are reaped. Direct component launches also receive the
//! viewer options as `--<extra>=<bool>` arguments ahead of the path. Secure
//! references are resolved through the [`FileProvider`] that minted them.

use super::capability::{AppInfo, AppLauncher};
use super::provider::FileProvider;
use crate::error::{Error, Result};
use crate::viewer::{Action, Intent, ViewerOptions};

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command as AsyncCommand;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// An application known to the launcher.
#[derive(Debug, Clone)]
pub struct AppEntry {
    pub package: String,
    pub label: String,
    /// Program spawned on launch.
    pub program: PathBuf,
    /// Arguments placed before the file path.
    pub args: Vec<String>,
    /// Accepted generic actions with their MIME patterns (`*/*`, `type/*` or exact).
    pub filters: Vec<(Action, String)>,
    /// Viewer component classes that can be launched directly.
    pub components: Vec<String>,
}

impl AppEntry {
    pub fn new(package: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        let package = package.into();
        Self {
            label: package.clone(),
            package,
            program: program.into(),
            args: Vec::new(),
            filters: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Declares that the app accepts `action` for MIME types matching `mime`.
    pub fn handles(mut self, action: Action, mime: impl Into<String>) -> Self {
        self.filters.push((action, mime.into()));
        self
    }

    /// Declares a directly launchable viewer component.
    pub fn component(mut self, class: impl Into<String>) -> Self {
        self.components.push(class.into());
        self
    }

    fn info(&self) -> AppInfo {
        AppInfo::new(self.package.clone(), self.label.clone())
    }

    fn accepts(&self, action: Action, mime: &str) -> bool {
        self.filters
            .iter()
            .any(|(a, pattern)| *a == action && mime_matches(pattern, mime))
    }

    fn matches(&self, intent: &Intent) -> bool {
        match intent {
            Intent::View { mime, package, .. } => {
                package.as_deref().map_or(true, |p| p == self.package)
                    && self.accepts(Action::View, mime)
            }
            Intent::Send { mime, .. } => self.accepts(Action::Send, mime),
            Intent::Chooser { target, .. } => self.matches(target),
            Intent::Component { component, .. } => {
                component.package == self.package && self.components.contains(&component.class)
            }
        }
    }
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    if pattern == "*/*" || pattern.eq_ignore_ascii_case(mime) {
        return true;
    }
    match pattern.strip_suffix("/*") {
        Some(major) => mime
            .split_once('/')
            .is_some_and(|(m, _)| m.eq_ignore_ascii_case(major)),
        None => false,
    }
}

/// Launches registered desktop programs.
#[derive(Debug)]
pub struct CommandLauncher {
    apps: Vec<AppEntry>,
    provider: Arc<FileProvider>,
}

impl CommandLauncher {
    pub fn new(provider: Arc<FileProvider>) -> Self {
        Self {
            apps: Vec::new(),
            provider,
        }
    }

    /// Registers an application. Earlier registrations win when several match.
    pub fn install(mut self, app: AppEntry) -> Self {
        self.apps.push(app);
        self
    }

    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    fn find(&self, intent: &Intent) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.matches(intent))
    }

    fn file_path(&self, intent: &Intent) -> Result<PathBuf> {
        match intent.target() {
            Intent::Component { path, .. } => Ok(path.clone()),
            target => {
                let reference = target
                    .file_reference()
                    .ok_or_else(|| Error::Unexpected("Intent carries no file".into()))?;
                self.provider.resolve(reference).ok_or_else(|| {
                    Error::Unexpected(format!("No read grant for {}", reference))
                })
            }
        }
    }
}

impl AppLauncher for CommandLauncher {
    fn resolve(&self, intent: &Intent) -> Option<AppInfo> {
        self.find(intent).map(AppEntry::info)
    }

    fn launch(&self, intent: &Intent) -> Result<AppInfo> {
        let app = self.find(intent).ok_or(Error::NoHandler)?;
        let path = self.file_path(intent)?;
        // The child is registered with, and reaped by, the current runtime.
        let runtime = Handle::try_current()
            .map_err(|e| Error::Unexpected(format!("Cannot launch {}: {}", app.package, e)))?;

        let mut cmd = AsyncCommand::new(&app.program);
        cmd.args(&app.args);
        if let Intent::Component { options, .. } = intent.target() {
            cmd.args(viewer_args(options));
        }
        cmd.arg(&path);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        debug!("Spawning {:?} for {:?}", app.program, path);
        let mut child = cmd
            .spawn()
            .map_err(|e| Error::Unexpected(format!("Failed to launch {}: {}", app.package, e)))?;

        let package = app.package.clone();
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) => debug!("{} exited with {}", package, status),
                Err(e) => warn!("Failed to wait for {}: {}", package, e),
            }
        });

        info!("Opened {:?} with {}", path, app.package);
        Ok(app.info())
    }
}

/// Viewer options rendered as command line flags.
fn viewer_args(options: &ViewerOptions) -> Vec<String> {
    options
        .extras()
        .iter()
        .map(|(name, value)| format!("--{}={}", name, value))
        .collect()
}
