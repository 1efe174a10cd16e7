//! Choosing the intent for a downloaded file.
//!
//! Three dispatch strategies exist side by side and are picked by
//! configuration:
//!
//! - [`DispatchPolicy::SystemChooser`] views PDFs in a preferred package when
//!   it is installed, else offers a chooser over PDF viewers. Other files are
//!   offered to every app that accepts a binary stream.
//! - [`DispatchPolicy::DirectViewer`] hands every file to one named viewer
//!   component, by raw path.
//! - [`DispatchPolicy::ByExtension`] uses the named viewer for PDFs and the
//!   generic share chooser for everything else.

use super::intent::{ComponentName, Intent, ViewerOptions};
use crate::download::{DownloadResult, OCTET_STREAM_MIME, PDF_MIME};
use crate::error::Result;
use crate::platform::{AppLauncher, SecureFileExposer};

use tracing::debug;

/// Package preferred for PDFs by the default policy.
pub const GOOGLE_DOCS_PACKAGE: &str = "com.google.android.apps.docs";
/// Chooser title for PDFs.
pub const PDF_CHOOSER_TITLE: &str = "Open PDF with";
/// Chooser title for every other file.
pub const FILE_CHOOSER_TITLE: &str = "Open file with";

/// How a downloaded file is handed to a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// View PDFs in `preferred_package` if it resolves, else via a chooser.
    SystemChooser { preferred_package: Option<String> },
    /// Launch `component` directly for every file.
    DirectViewer {
        component: ComponentName,
        options: ViewerOptions,
    },
    /// Launch `component` for PDFs, share everything else.
    ByExtension {
        component: ComponentName,
        options: ViewerOptions,
    },
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        DispatchPolicy::SystemChooser {
            preferred_package: Some(GOOGLE_DOCS_PACKAGE.to_string()),
        }
    }
}

impl DispatchPolicy {
    /// Builds the intent for `download`.
    ///
    /// The launcher is only consulted to test whether the preferred package is
    /// installed. Nothing is launched here.
    pub fn build_intent(
        &self,
        download: &DownloadResult,
        exposer: &dyn SecureFileExposer,
        launcher: &dyn AppLauncher,
    ) -> Result<Intent> {
        let is_pdf = download.kind().is_pdf();
        match self {
            DispatchPolicy::DirectViewer { component, options } => {
                debug!("Delegating to viewer component {} with {:?}", component, options.extras());
                Ok(Intent::component(component.clone(), download.path(), *options))
            }
            DispatchPolicy::ByExtension { component, options } if is_pdf => {
                debug!("Opening PDF with viewer component {} with {:?}", component, options.extras());
                Ok(Intent::component(component.clone(), download.path(), *options))
            }
            DispatchPolicy::SystemChooser { preferred_package } if is_pdf => {
                let reference = exposer.expose(download.path())?;
                let view = Intent::view(reference, PDF_MIME);

                if let Some(package) = preferred_package {
                    let preferred = view.clone().with_package(package.as_str());
                    if launcher.resolve(&preferred).is_some() {
                        debug!("Opening PDF with preferred package {}", package);
                        return Ok(preferred);
                    }
                    debug!("{} not available, using chooser", package);
                }
                Ok(view.into_chooser(PDF_CHOOSER_TITLE))
            }
            _ => {
                debug!("Showing chooser for non-PDF file");
                let reference = exposer.expose(download.path())?;
                Ok(Intent::send(reference, OCTET_STREAM_MIME).into_chooser(FILE_CHOOSER_TITLE))
            }
        }
    }
}
