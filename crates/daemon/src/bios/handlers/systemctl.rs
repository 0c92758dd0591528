// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `system.systemctl` handlers: status/enablement reads and the five
//! write actions, targeting either a bare unit `name` or an installed
//! app resolved through `(app_id, version)`.

use std::sync::Arc;

use serde_json::Value;

use flexbios_adapters::SystemctlAction;
use flexbios_wire::{Envelope, SystemctlRequest};

use crate::bios::BiosSupervisor;
use crate::error::BiosError;

fn unit_name(name: &str) -> String {
    if name.ends_with(".service") {
        name.to_string()
    } else {
        format!("{name}.service")
    }
}

async fn resolve_unit(sup: &BiosSupervisor, req: &SystemctlRequest) -> Result<String, BiosError> {
    if let Some(name) = &req.name {
        return Ok(unit_name(name));
    }
    if let (Some(app_id), Some(version)) = (&req.app_id, &req.version) {
        let descriptor = sup.app_manager.get_app_by_id(app_id, version)?;
        return Ok(descriptor.unit_name());
    }
    Err(BiosError::InvalidParams("systemctl request requires name or (app_id, version)".to_string()))
}

pub async fn status(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: SystemctlRequest = serde_json::from_value(body)?;
    let unit = resolve_unit(&sup, &req).await?;
    let status = sup.systemctl.status(&unit).await?;
    Ok(Envelope::ok(serde_json::to_value(status)?))
}

pub async fn is_enabled(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: SystemctlRequest = serde_json::from_value(body)?;
    let unit = resolve_unit(&sup, &req).await?;
    let enabled = sup.systemctl.is_enabled(&unit).await?;
    Ok(Envelope::ok(Value::Bool(enabled)))
}

pub async fn show(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: SystemctlRequest = serde_json::from_value(body)?;
    let property = req
        .property
        .clone()
        .ok_or_else(|| BiosError::InvalidParams("show requires a property name".to_string()))?;
    let unit = resolve_unit(&sup, &req).await?;
    let value = sup.systemctl.show(&unit, &property).await?;
    Ok(Envelope::ok(Value::String(value)))
}

async fn apply_action(sup: Arc<BiosSupervisor>, body: Value, action: SystemctlAction) -> Result<Envelope, BiosError> {
    let req: SystemctlRequest = serde_json::from_value(body)?;
    let unit = resolve_unit(&sup, &req).await?;
    sup.systemctl.do_action(&unit, action).await?;
    Ok(Envelope::ok(Value::String(unit)))
}

pub async fn start(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    apply_action(sup, body, SystemctlAction::Start).await
}

pub async fn stop(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    apply_action(sup, body, SystemctlAction::Stop).await
}

pub async fn restart(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    apply_action(sup, body, SystemctlAction::Restart).await
}

pub async fn enable(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    apply_action(sup, body, SystemctlAction::Enable).await
}

pub async fn disable(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    apply_action(sup, body, SystemctlAction::Disable).await
}

#[cfg(test)]
#[path = "systemctl_tests.rs"]
mod tests;
