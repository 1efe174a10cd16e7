//! Host capabilities and their desktop implementations.
//!
//! - [`capability`] - The [`AppLauncher`] and [`SecureFileExposer`] seams
//! - [`provider`] - [`FileProvider`], a grant table behind `content://` references
//! - [`command`] - [`CommandLauncher`], resolving intents against registered programs

pub mod capability;
pub mod command;
pub mod provider;

pub use capability::{AppInfo, AppLauncher, FileReference, SecureFileExposer};
pub use command::{AppEntry, CommandLauncher};
pub use provider::{FileProvider, FILE_PROVIDER_SUFFIX};
