// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Encoding of an RQL script's return value onto the bus.
//!
//! This lives here rather than in the `engine` crate because it's part of
//! the bus handler's response shaping, not of rule execution itself.

use rhai::Dynamic;

/// Encode a script's return value the way the bus handler puts it on the
/// wire: scalars as their plain textual form, arrays/maps as JSON, and
/// nothing (unit) as an empty byte string.
pub fn encode_rql_value(value: Dynamic) -> Vec<u8> {
    if value.is_unit() {
        return Vec::new();
    }
    if let Some(b) = value.clone().try_cast::<bool>() {
        return b.to_string().into_bytes();
    }
    if let Some(i) = value.clone().try_cast::<i64>() {
        return i.to_string().into_bytes();
    }
    if let Some(f) = value.clone().try_cast::<f64>() {
        return f.to_string().into_bytes();
    }
    if let Some(s) = value.clone().try_cast::<rhai::ImmutableString>() {
        return s.to_string().into_bytes();
    }
    if value.is_array() || value.is_map() {
        return rhai::serde::from_dynamic::<serde_json::Value>(&value)
            .map(|v| serde_json::to_vec(&v).unwrap_or_default())
            .unwrap_or_default();
    }
    Vec::new()
}

#[cfg(test)]
#[path = "rql_tests.rs"]
mod tests;
