// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `system.store` handlers: the object-store actions reachable both from
//! `{uuid}.post.system.store.*` and the legacy `bios.{uuid}.store`
//! envelope (`crate::bios::BiosSupervisor::dispatch_legacy_store`).

use std::sync::Arc;

use base64::Engine;
use serde_json::Value;

use flexbios_storage::BucketConfig;
use flexbios_wire::{Envelope, StoreRequest};

use crate::bios::BiosSupervisor;
use crate::error::BiosError;

fn require_object_name(req: &StoreRequest) -> Result<String, BiosError> {
    req.object_name
        .clone()
        .ok_or_else(|| BiosError::InvalidParams(format!("store request on {} requires object_name", req.store_name)))
}

pub async fn get_stores(sup: Arc<BiosSupervisor>, _body: Value) -> Result<Envelope, BiosError> {
    let buckets = sup.object_store.list_buckets().await?;
    Ok(Envelope::ok(serde_json::to_value(buckets)?))
}

pub async fn get_object(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: StoreRequest = serde_json::from_value(body)?;
    let object_name = require_object_name(&req)?;
    let bytes = sup.object_store.get_bytes(&req.store_name, &object_name).await?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(Envelope::ok(Value::String(encoded)))
}

pub async fn add_object(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: StoreRequest = serde_json::from_value(body)?;
    let object_name = require_object_name(&req)?;
    let data = req
        .decoded_data()
        .map_err(|e| BiosError::InvalidParams(format!("invalid base64 data: {e}")))?
        .ok_or_else(|| BiosError::InvalidParams("add.object requires data".to_string()))?;
    sup.object_store.create_bucket(&req.store_name, BucketConfig::default()).await?;
    sup.object_store.put_bytes(&req.store_name, &object_name, data, true).await?;
    Ok(Envelope::ok(Value::String(object_name)))
}

pub async fn delete_object(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: StoreRequest = serde_json::from_value(body)?;
    let object_name = require_object_name(&req)?;
    sup.object_store.delete_object(&req.store_name, &object_name).await?;
    Ok(Envelope::ok(Value::String(object_name)))
}

pub async fn download_object(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: StoreRequest = serde_json::from_value(body)?;
    let object_name = require_object_name(&req)?;
    let dest_dir = sup.config.apps_root().join("downloads").join(&req.store_name);
    let path = sup.object_store.download_object(&req.store_name, &object_name, &dest_dir).await?;
    Ok(Envelope::ok(Value::String(path.to_string_lossy().into_owned())))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
