//! The fetch-and-open pipeline, its builder and configuration.
//!
//! - `fetch_and_open` - [`FetchAndOpen`] running request, download, dispatch
//! - `builder` - [`FetchAndOpenBuilder`] for configuring it
//! - `config` - [`Config`] with its defaults

pub mod builder;
pub mod config;
pub mod fetch_and_open;

pub use builder::FetchAndOpenBuilder;
pub use config::Config;
pub use fetch_and_open::{FetchAndOpen, OpenOutcome};
