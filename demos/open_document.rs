//! Example fetching a document and opening it with a desktop viewer.
//!
//! ```text
//! RUST_LOG=fetch_and_open=debug cargo run --example open_document -- https://example.com/report.pdf
//! ```

use color_eyre::Result;
use fetch_and_open::{
    Action, AppEntry, BridgeResult, CommandLauncher, FetchAndOpenBuilder, FileProvider, Plugin,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf".into());

    let directory = PathBuf::from("downloads");
    let provider = Arc::new(FileProvider::for_package("com.example.demo", &directory));
    let launcher = CommandLauncher::new(provider.clone())
        .install(
            AppEntry::new("org.freedesktop.xdg-open", "xdg-open")
                .label("Default application")
                .handles(Action::View, "application/pdf")
                .handles(Action::Send, "*/*"),
        );

    let pipeline = FetchAndOpenBuilder::new(launcher, provider)
        .directory(directory)
        .build()?;
    let plugin = Plugin::new(pipeline, tokio::runtime::Handle::current());

    let (tx, rx) = oneshot::channel();
    plugin.execute("downloadFile", &json!([url]), move |result| {
        let _ = tx.send(result);
    });

    match rx.await? {
        BridgeResult::Success(message) => println!("{}", message),
        BridgeResult::Error(message) => eprintln!("{}", message),
    }

    Ok(())
}
