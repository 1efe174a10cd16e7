//! Error handling for fetch-and-open.
//!
//! Every failure of the download-then-dispatch pipeline is one of the variants
//! below. They are all terminal for the invocation that raised them; nothing is
//! retried. At the bridge boundary an error is flattened into a single message
//! with [`Error::callback_message`].

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Message reported when no installed application resolves the intent.
pub const NO_HANDLER_MESSAGE: &str = "No app found to open this file type.";

/// Errors that can happen while fetching and opening a file.
#[derive(Error, Debug)]
pub enum Error {
    /// The URL cannot be parsed or is not an absolute HTTP(S) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection or transfer failure, including non-success HTTP statuses.
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Local write failure.
    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: io::Error,
    },

    /// No installed application resolves the constructed intent.
    #[error("{}", NO_HANDLER_MESSAGE)]
    NoHandler,

    /// Anything else that went wrong during the sequence.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Network {
            source: source.into(),
        }
    }
}

impl Error {
    /// Renders the flat text handed to the bridge callback.
    ///
    /// The caller on the other side of the bridge only ever sees text, so the
    /// whole source chain is folded in. That keeps the underlying connection
    /// error ("Connection refused" and friends) visible to the app.
    pub fn callback_message(&self) -> String {
        if let Error::NoHandler = self {
            return NO_HANDLER_MESSAGE.to_string();
        }

        let mut message = format!("Failed: {}", self);
        let mut source = self.source();
        // The variant display already embeds its direct source.
        if matches!(self, Error::Network { .. } | Error::Storage { .. }) {
            source = source.and_then(StdError::source);
        }
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

/// Result type alias for operations that can fail with a fetch-and-open error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_handler_message() {
        assert_eq!(
            Error::NoHandler.callback_message(),
            "No app found to open this file type."
        );
    }

    #[test]
    fn test_invalid_url_message() {
        let err = Error::InvalidUrl("nope".into());
        assert_eq!(err.callback_message(), "Failed: Invalid URL: nope");
    }

    #[test]
    fn test_storage_message_includes_cause() {
        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        let message = err.callback_message();
        assert!(message.starts_with("Failed: Storage error"));
        assert!(message.contains("read-only"));
    }
}
