// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `git.manager` handlers: list and download a tagged GitHub release
//! asset into the app library, via [`flexbios_adapters::GitDownloader`].

use std::sync::Arc;

use serde_json::Value;

use flexbios_wire::{Envelope, GitManagerRequest};

use crate::bios::BiosSupervisor;
use crate::error::BiosError;

pub async fn list_assets(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: GitManagerRequest = serde_json::from_value(body)?;
    let assets = sup.git_downloader.list_release_assets(&req.owner, &req.repo, &req.tag).await?;
    Ok(Envelope::ok(serde_json::to_value(assets)?))
}

pub async fn download_asset(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: GitManagerRequest = serde_json::from_value(body)?;
    let asset_name = req
        .asset_name
        .clone()
        .ok_or_else(|| BiosError::InvalidParams("git.manager.download requires asset_name".to_string()))?;
    let token = req.token.clone().or_else(|| sup.config.git_token.clone());
    let dest_dir = sup.app_manager.config().library_dir();
    let path = sup
        .git_downloader
        .download_asset(&req.owner, &req.repo, &req.tag, &asset_name, token.as_deref(), &dest_dir)
        .await?;
    Ok(Envelope::ok(Value::String(path.to_string_lossy().into_owned())))
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
