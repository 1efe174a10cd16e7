//! The JavaScript bridge entry point.
//!
//! The application layer calls [`Plugin::execute`] with an action name, a JSON
//! array of arguments and a completion callback. The only action is
//! `downloadFile`, whose single argument is the URL to fetch. The call returns
//! at once; the work runs as a task on the host's tokio runtime and the
//! callback receives exactly one [`BridgeResult`] when it is done.
//!
//! # Callback messages
//!
//! - `Success("File opened successfully")` once an application was launched
//! - `Error("No app found to open this file type.")` when nothing resolves the intent
//! - `Error("Failed: <cause>")` for every other failure, with the cause chain
//!   folded in
//!
//! # Examples
//!
//! ```rust,no_run
//! use fetch_and_open::bridge::{BridgeResult, Plugin};
//! use fetch_and_open::pipeline::FetchAndOpenBuilder;
//! use fetch_and_open::platform::{CommandLauncher, FileProvider};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(FileProvider::for_package("com.example.app", "files"));
//! let pipeline = FetchAndOpenBuilder::new(CommandLauncher::new(provider.clone()), provider)
//!     .directory("files".into())
//!     .build()?;
//! let plugin = Plugin::new(pipeline, tokio::runtime::Handle::current());
//!
//! plugin.execute("downloadFile", &json!(["https://example.com/report.pdf"]), |result| {
//!     match result {
//!         BridgeResult::Success(message) => println!("{}", message),
//!         BridgeResult::Error(message) => eprintln!("{}", message),
//!     }
//! });
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::pipeline::{FetchAndOpen, OpenOutcome};

use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Name of the bridge action that downloads and opens a file.
pub const DOWNLOAD_FILE_ACTION: &str = "downloadFile";
/// Message sent to the callback when a file was opened.
pub const SUCCESS_MESSAGE: &str = "File opened successfully";

/// The single asynchronous answer to a bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeResult {
    Success(String),
    Error(String),
}

impl BridgeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BridgeResult::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            BridgeResult::Success(m) | BridgeResult::Error(m) => m,
        }
    }
}

impl From<Result<OpenOutcome>> for BridgeResult {
    fn from(result: Result<OpenOutcome>) -> Self {
        match result {
            Ok(_) => BridgeResult::Success(SUCCESS_MESSAGE.to_string()),
            Err(e) => BridgeResult::Error(e.callback_message()),
        }
    }
}

/// Bridge plugin dispatching calls onto a [`FetchAndOpen`] pipeline.
#[derive(Debug, Clone)]
pub struct Plugin {
    pipeline: Arc<FetchAndOpen>,
    runtime: Handle,
}

impl Plugin {
    /// Creates a plugin that runs its work on `runtime`.
    pub fn new(pipeline: FetchAndOpen, runtime: Handle) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            runtime,
        }
    }

    /// Handles a bridge call.
    ///
    /// Returns `false` for unknown actions, in which case `callback` is
    /// dropped without being called. A missing or non-string URL argument is
    /// treated as an empty URL and reported through the callback.
    pub fn execute<F>(&self, action: &str, args: &Value, callback: F) -> bool
    where
        F: FnOnce(BridgeResult) + Send + 'static,
    {
        debug!("execute called with action: {}", action);
        if action != DOWNLOAD_FILE_ACTION {
            warn!("Unknown action: {}", action);
            return false;
        }

        let url = args
            .get(0)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        debug!("downloadFile requested for URL: {}", url);

        let pipeline = self.pipeline.clone();
        self.runtime.spawn(async move {
            let result = pipeline.fetch_and_open(&url).await;
            callback(BridgeResult::from(result));
        });
        true
    }
}
