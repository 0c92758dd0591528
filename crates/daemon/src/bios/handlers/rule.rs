// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `system.rule` handlers: the bus-facing entry point into the embedded
//! RQL engine, spec §4.7's "evaluate a short script received over the
//! bus". A `run` request names the rule, carries the script text and an
//! optional `properties` map, and the reply payload is the script's
//! return value encoded per `flexbios_wire::encode_rql_value`.

use std::sync::Arc;

use serde_json::Value;

use flexbios_wire::{encode_rql_value, Envelope, RuleRequest};

use crate::bios::BiosSupervisor;
use crate::error::BiosError;

pub async fn run(sup: Arc<BiosSupervisor>, body: Value) -> Result<Envelope, BiosError> {
    let req: RuleRequest = serde_json::from_value(body)?;
    let result = sup.rule_engine.run_and_destroy(&req.name, &req.script, req.properties).await?;
    let bytes = encode_rql_value(result);
    let payload = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
        if bytes.is_empty() {
            Value::Null
        } else {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
    });
    Ok(Envelope::ok(payload))
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
