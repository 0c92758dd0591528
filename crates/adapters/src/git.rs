// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub release asset listing and download, used by BIOS's
//! `{uuid}.get.git.manager.*` / `{uuid}.post.git.manager.*` subject family
//! to populate the app library from a release artifact.
//!
//! Grounded on `utils/gitdownloader/base.go`'s `GitHubDownloader`, narrowed
//! to the single-tag listing and download the bus handlers actually need
//! (the original's cross-release `ListAllAssets`/`ListAssetsByArch` sweep
//! has no caller in `modules/bios/git.go`).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AdapterError;

/// One asset attached to a tagged GitHub release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub browser_download_url: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    assets: Vec<ReleaseAsset>,
}

#[async_trait]
pub trait GitDownloader: Send + Sync {
    async fn list_release_assets(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Vec<ReleaseAsset>, AdapterError>;

    /// Downloads `asset_name` from the given tagged release into
    /// `dest_dir`, returning the file's final path.
    async fn download_asset(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
        asset_name: &str,
        token: Option<&str>,
        dest_dir: &Path,
    ) -> Result<PathBuf, AdapterError>;
}

/// Implementation against the real GitHub releases REST API.
pub struct RestGitDownloader {
    client: reqwest::Client,
    api_base: String,
}

impl RestGitDownloader {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new(), api_base: "https://api.github.com".to_string() }
    }

    fn auth(req: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
        let req = req.header("User-Agent", "flexbios");
        match token {
            Some(t) if !t.is_empty() => req.bearer_auth(t),
            _ => req,
        }
    }
}

impl Default for RestGitDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitDownloader for RestGitDownloader {
    async fn list_release_assets(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Vec<ReleaseAsset>, AdapterError> {
        let url = format!("{}/repos/{owner}/{repo}/releases/tags/{tag}", self.api_base);
        let req = Self::auth(self.client.get(url), None);
        let release: ReleaseResponse = req.send().await?.error_for_status()?.json().await?;
        Ok(release.assets)
    }

    async fn download_asset(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
        asset_name: &str,
        token: Option<&str>,
        dest_dir: &Path,
    ) -> Result<PathBuf, AdapterError> {
        let assets = self.list_release_assets(owner, repo, tag).await?;
        let asset = assets
            .into_iter()
            .find(|a| a.name == asset_name)
            .ok_or_else(|| AdapterError::NotFound(format!("release asset {asset_name}")))?;

        tokio::fs::create_dir_all(dest_dir).await?;
        let dest_path = dest_dir.join(&asset.name);

        let req = Self::auth(self.client.get(&asset.browser_download_url), token);
        let bytes = req.send().await?.error_for_status()?.bytes().await?;
        tokio::fs::write(&dest_path, &bytes).await?;
        Ok(dest_path)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeGitDownloader;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{AdapterError, GitDownloader, Path, PathBuf, ReleaseAsset};

    /// Serves a fixed set of release assets and writes fixed bytes on
    /// download, used by `engine`/`daemon` test suites that need a
    /// `GitDownloader` without reaching the real GitHub API.
    #[derive(Clone, Default)]
    pub struct FakeGitDownloader {
        assets: Arc<Mutex<Vec<ReleaseAsset>>>,
        contents: Arc<Mutex<std::collections::HashMap<String, Vec<u8>>>>,
    }

    impl FakeGitDownloader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed_asset(&self, asset: ReleaseAsset, contents: Vec<u8>) {
            self.contents.lock().insert(asset.name.clone(), contents);
            self.assets.lock().push(asset);
        }
    }

    #[async_trait]
    impl GitDownloader for FakeGitDownloader {
        async fn list_release_assets(
            &self,
            _owner: &str,
            _repo: &str,
            _tag: &str,
        ) -> Result<Vec<ReleaseAsset>, AdapterError> {
            Ok(self.assets.lock().clone())
        }

        async fn download_asset(
            &self,
            _owner: &str,
            _repo: &str,
            _tag: &str,
            asset_name: &str,
            _token: Option<&str>,
            dest_dir: &Path,
        ) -> Result<PathBuf, AdapterError> {
            let bytes = self
                .contents
                .lock()
                .get(asset_name)
                .cloned()
                .ok_or_else(|| AdapterError::NotFound(format!("release asset {asset_name}")))?;
            tokio::fs::create_dir_all(dest_dir).await?;
            let dest_path = dest_dir.join(asset_name);
            tokio::fs::write(&dest_path, &bytes).await?;
            Ok(dest_path)
        }
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
