//! Tests for the `downloadFile` bridge action.

use fetch_and_open::{BridgeResult, Plugin};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

mod common;
use common::helpers::*;
use common::server::{unreachable_url, TestServer};

fn plugin(dir: &std::path::Path, launcher: Arc<RecordingLauncher>) -> Plugin {
    let pipeline = create_test_builder(dir, launcher).build().unwrap();
    Plugin::new(pipeline, Handle::current())
}

/// Runs one bridge call and waits for its callback.
async fn call(plugin: &Plugin, action: &str, args: serde_json::Value) -> Option<BridgeResult> {
    let (tx, rx) = oneshot::channel();
    let handled = plugin.execute(action, &args, move |result| {
        let _ = tx.send(result);
    });
    if !handled {
        return None;
    }
    Some(
        tokio::time::timeout(Duration::from_secs(10), rx)
            .await
            .expect("callback was not invoked in time")
            .expect("callback was dropped"),
    )
}

#[tokio::test]
async fn test_download_file_success() {
    let temp_dir = create_temp_dir();
    let server = TestServer::builder()
        .file("/report.pdf", create_test_content(200))
        .start()
        .await;
    let plugin = plugin(temp_dir.path(), Arc::new(RecordingLauncher::everything()));

    let result = call(&plugin, "downloadFile", json!([server.url("/report.pdf")]))
        .await
        .unwrap();

    assert_eq!(result, BridgeResult::Success("File opened successfully".into()));
    assert_eq!(list_files(temp_dir.path()).len(), 1);
}

#[tokio::test]
async fn test_download_file_without_handler() {
    let temp_dir = create_temp_dir();
    let server = TestServer::builder()
        .file("/data.csv", create_test_content(50))
        .start()
        .await;
    let plugin = plugin(temp_dir.path(), Arc::new(RecordingLauncher::nothing()));

    let result = call(&plugin, "downloadFile", json!([server.url("/data.csv")]))
        .await
        .unwrap();

    assert_eq!(
        result,
        BridgeResult::Error("No app found to open this file type.".into())
    );
}

#[tokio::test]
async fn test_download_file_unreachable() {
    let temp_dir = create_temp_dir();
    let plugin = plugin(temp_dir.path(), Arc::new(RecordingLauncher::everything()));

    let url = unreachable_url("/report.pdf").await;
    let result = call(&plugin, "downloadFile", json!([url])).await.unwrap();

    assert!(!result.is_success());
    assert!(result.message().starts_with("Failed: "));
    assert!(result.message().contains("Connection refused"), "{}", result.message());
    assert!(list_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_missing_argument_is_reported() {
    let temp_dir = create_temp_dir();
    let plugin = plugin(temp_dir.path(), Arc::new(RecordingLauncher::everything()));

    for args in [json!([]), json!([42]), json!(null)] {
        let result = call(&plugin, "downloadFile", args).await.unwrap();
        assert!(result.message().starts_with("Failed: Invalid URL"));
    }
}

#[tokio::test]
async fn test_unknown_action_is_not_handled() {
    let temp_dir = create_temp_dir();
    let launcher = Arc::new(RecordingLauncher::everything());
    let plugin = plugin(temp_dir.path(), launcher.clone());

    let (tx, rx) = oneshot::channel::<BridgeResult>();
    let handled = plugin.execute("openFile", &json!(["https://example.com/a.pdf"]), move |r| {
        let _ = tx.send(r);
    });

    assert!(!handled);
    assert!(rx.await.is_err());
    assert!(launcher.launched().is_empty());
}
