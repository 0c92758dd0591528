// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `apps.manager` handlers: library/installed/backup listings and the
//! install/uninstall/restore/systemctl state machine, delegating to
//! [`flexbios_appmgr::AppManager`].

use std::sync::Arc;

use serde_json::Value;

use flexbios_adapters::SystemctlAction;
use flexbios_core::AppDescriptor;
use flexbios_wire::{AppManagerRequest, Envelope};

use crate::bios::BiosSupervisor;
use crate::error::BiosError;

fn require_version(req: &AppManagerRequest) -> Result<String, BiosError> {
    req.version
        .clone()
        .ok_or_else(|| BiosError::InvalidParams(format!("{} request requires a version", req.name)))
}

pub async fn installed(sup: Arc<BiosSupervisor>, _body: Value) -> Result<Envelope, BiosError> {
    let apps = sup.app_manager.list_installed_apps()?;
    Ok(Envelope::ok(serde_json::to_value(apps)?))
}

pub async fn library(sup: Arc<BiosSupervisor>, _body: Value) -> Result<Envelope, BiosError> {
    let apps = sup.app_manager.list_library_apps()?;
    Ok(Envelope::ok(serde_json::to_value(apps)?))
}

pub async fn backups(sup: Arc<BiosSupervisor>, _body: Value) -> Result<Envelope, BiosError> {
    let apps = sup.app_manager.list_backups()?;
    Ok(Envelope::ok(serde_json::to_value(apps)?))
}

pub async fn install(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: AppManagerRequest = serde_json::from_value(body)?;
    let version = require_version(&req)?;
    let descriptor = AppDescriptor::new(req.name, version);
    sup.app_manager.install(&descriptor).await?;
    Ok(Envelope::ok(Value::String(format!("{}@{}", descriptor.name, descriptor.version))))
}

pub async fn uninstall(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: AppManagerRequest = serde_json::from_value(body)?;
    let version = require_version(&req)?;
    sup.app_manager.uninstall(&req.name, &version).await?;
    Ok(Envelope::ok(Value::String(format!("{}@{}", req.name, version))))
}

pub async fn restore(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: AppManagerRequest = serde_json::from_value(body)?;
    let version = require_version(&req)?;
    sup.app_manager.restore_backup(&req.name, &version).await?;
    Ok(Envelope::ok(Value::String(format!("{}@{}", req.name, version))))
}

/// `apps.manager.systemctl`: runs a systemctl write action against an
/// installed app's unit. The action itself travels in the body's
/// `action` field — not the dispatch `action` fallback, the actual verb
/// to run (`start`/`stop`/`restart`/`enable`/`disable`).
pub async fn systemctl(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: AppManagerRequest = serde_json::from_value(body)?;
    let action_str = req
        .action
        .clone()
        .ok_or_else(|| BiosError::InvalidParams("apps.manager.systemctl requires an action".to_string()))?;
    let action = SystemctlAction::try_from(action_str.as_str())?;
    let unit = format!("{}.service", req.name);
    sup.systemctl.do_action(&unit, action).await?;
    Ok(Envelope::ok(Value::String(unit)))
}

#[cfg(test)]
#[path = "apps_tests.rs"]
mod tests;
