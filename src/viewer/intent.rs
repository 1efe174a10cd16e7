//! Platform "open document" actions.
//!
//! An [`Intent`] describes what should happen to a downloaded file without
//! doing it. The host's [`AppLauncher`](crate::platform::AppLauncher) decides
//! whether anything installed can carry it out.

use crate::platform::FileReference;
use std::fmt;
use std::path::{Path, PathBuf};

/// The generic actions a receiving application may declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Display the referenced document.
    View,
    /// Receive the referenced file as a stream.
    Send,
}

/// Flags attached to [`Intent::View`] and [`Intent::Send`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    /// The receiver may read the file reference for the lifetime of its task.
    pub grant_read_uri: bool,
    /// The launched viewer is not kept in the back stack.
    pub no_history: bool,
}

/// Fully qualified name of a viewer component inside an installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    pub package: String,
    pub class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Display toggles passed to a directly launched viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub share: bool,
    pub print: bool,
    pub search: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            share: true,
            print: true,
            search: true,
        }
    }
}

impl ViewerOptions {
    /// The options as named boolean extras.
    pub fn extras(&self) -> [(&'static str, bool); 3] {
        [
            ("enableShare", self.share),
            ("enablePrint", self.print),
            ("enableSearch", self.search),
        ]
    }
}

/// An action to hand to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// View a document, optionally constrained to one package.
    View {
        data: FileReference,
        mime: String,
        package: Option<String>,
        flags: IntentFlags,
    },
    /// Send a file to whichever application the user picks.
    Send {
        stream: FileReference,
        mime: String,
        flags: IntentFlags,
    },
    /// Let the user pick among every application that resolves `target`.
    Chooser { target: Box<Intent>, title: String },
    /// Launch a named viewer component with the raw file path.
    Component {
        component: ComponentName,
        path: PathBuf,
        options: ViewerOptions,
    },
}

impl Intent {
    /// A read-granting view intent with no history entry.
    pub fn view(data: FileReference, mime: impl Into<String>) -> Self {
        Intent::View {
            data,
            mime: mime.into(),
            package: None,
            flags: IntentFlags {
                grant_read_uri: true,
                no_history: true,
            },
        }
    }

    /// A read-granting send intent.
    pub fn send(stream: FileReference, mime: impl Into<String>) -> Self {
        Intent::Send {
            stream,
            mime: mime.into(),
            flags: IntentFlags {
                grant_read_uri: true,
                no_history: false,
            },
        }
    }

    /// A direct launch of `component` on `path`.
    pub fn component(component: ComponentName, path: &Path, options: ViewerOptions) -> Self {
        Intent::Component {
            component,
            path: path.to_path_buf(),
            options,
        }
    }

    /// Constrains a view intent to `package`. Other intents are returned as is.
    pub fn with_package(self, package: impl Into<String>) -> Self {
        match self {
            Intent::View {
                data, mime, flags, ..
            } => Intent::View {
                data,
                mime,
                package: Some(package.into()),
                flags,
            },
            other => other,
        }
    }

    /// Wraps this intent in a chooser.
    pub fn into_chooser(self, title: impl Into<String>) -> Self {
        Intent::Chooser {
            target: Box::new(self),
            title: title.into(),
        }
    }

    /// The intent a chooser ultimately dispatches, or `self`.
    pub fn target(&self) -> &Intent {
        match self {
            Intent::Chooser { target, .. } => target.target(),
            other => other,
        }
    }

    /// Whether the user is asked to pick the receiving application.
    pub fn is_chooser(&self) -> bool {
        matches!(self, Intent::Chooser { .. })
    }

    /// Generic action of the dispatched intent. `None` for direct launches.
    pub fn action(&self) -> Option<Action> {
        match self.target() {
            Intent::View { .. } => Some(Action::View),
            Intent::Send { .. } => Some(Action::Send),
            _ => None,
        }
    }

    /// MIME type of the dispatched intent.
    pub fn mime_type(&self) -> Option<&str> {
        match self.target() {
            Intent::View { mime, .. } | Intent::Send { mime, .. } => Some(mime.as_str()),
            _ => None,
        }
    }

    /// Package the dispatched intent is constrained to.
    pub fn package(&self) -> Option<&str> {
        match self.target() {
            Intent::View { package, .. } => package.as_deref(),
            Intent::Component { component, .. } => Some(component.package.as_str()),
            _ => None,
        }
    }

    /// The secure file reference carried by the dispatched intent.
    pub fn file_reference(&self) -> Option<&FileReference> {
        match self.target() {
            Intent::View { data, .. } => Some(data),
            Intent::Send { stream, .. } => Some(stream),
            _ => None,
        }
    }
}
