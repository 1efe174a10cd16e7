//! Building the viewer action for a downloaded file.
//!
//! - [`intent`] - The platform actions a file can be dispatched with
//! - [`policy`] - Which action a given download gets

pub mod intent;
pub mod policy;

pub use intent::{Action, ComponentName, Intent, IntentFlags, ViewerOptions};
pub use policy::{DispatchPolicy, FILE_CHOOSER_TITLE, GOOGLE_DOCS_PACKAGE, PDF_CHOOSER_TITLE};
