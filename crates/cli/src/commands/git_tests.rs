use flexbios_adapters::ReleaseAsset;

use crate::output::OutputFormat;
use crate::test_support::test_node;

use super::*;

#[tokio::test]
async fn download_known_asset_succeeds() {
    let node = test_node().await;
    node.git.seed_asset(
        ReleaseAsset { name: "app-arm64.zip".to_string(), browser_download_url: "https://example.invalid/a".to_string() },
        b"bytes".to_vec(),
    );
    let args = GithubDownloadArgs {
        owner: "acme".to_string(),
        repo: "widget".to_string(),
        tag: "v1.0.0".to_string(),
        arch: "app-arm64.zip".to_string(),
        token: None,
    };
    assert!(download(&node.client, args, OutputFormat::Text).await.is_ok());
}

#[tokio::test]
async fn download_missing_asset_exits_with_remote_error_code() {
    let node = test_node().await;
    let args = GithubDownloadArgs {
        owner: "acme".to_string(),
        repo: "widget".to_string(),
        tag: "v1.0.0".to_string(),
        arch: "does-not-exist.zip".to_string(),
        token: None,
    };
    let err = download(&node.client, args, OutputFormat::Text).await.unwrap_err();
    assert_eq!(err.code, 2);
}
