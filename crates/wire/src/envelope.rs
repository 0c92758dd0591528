// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `{code, message, payload}` response envelope every bus reply carries.

use flexbios_core::{BiosErrorKind, ResponseCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bus response envelope.
///
/// `payload` is untyped JSON because each endpoint shapes it differently
/// (a bare string for most `get` endpoints, an object for listings) — see
/// the per-resource request/response types in this crate for the shapes
/// that get placed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u32,
    pub message: String,
    pub payload: Value,
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.message, self.payload)
    }
}

impl Envelope {
    pub fn ok(payload: impl Into<Value>) -> Self {
        Self { code: ResponseCode::Success.code(), message: ResponseCode::Success.message().to_string(), payload: payload.into() }
    }

    pub fn error(code: ResponseCode, payload: impl Into<Value>) -> Self {
        Self { code: code.code(), message: code.message().to_string(), payload: payload.into() }
    }

    /// Build an envelope from whatever a handler returned, per the error
    /// taxonomy's own code mapping (module code stays authoritative, the
    /// payload carries the human-readable detail).
    pub fn from_error(err: &BiosErrorKind) -> Self {
        Self { code: err.code().code(), message: err.code().message().to_string(), payload: Value::String(err.to_string()) }
    }

    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success.code()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// The fixed-shape ping reply: just the replying host's uuid as `payload`.
pub fn ping_envelope(uuid: &str) -> Envelope {
    Envelope::ok(Value::String(uuid.to_string()))
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
