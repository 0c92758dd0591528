// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `BiosError`: the daemon-wide error type every collaborator's failure
//! converts into, and its mapping onto the wire envelope's `code` table
//! (spec.md §7).

use flexbios_core::{BiosErrorKind, ResponseCode};
use flexbios_wire::Envelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiosError {
    #[error(transparent)]
    Core(#[from] BiosErrorKind),

    #[error(transparent)]
    Bus(#[from] crate::bus::BusError),

    #[error(transparent)]
    Storage(#[from] flexbios_storage::StorageError),

    #[error(transparent)]
    Adapter(#[from] flexbios_adapters::AdapterError),

    #[error(transparent)]
    AppMgr(#[from] flexbios_appmgr::AppMgrError),

    #[error(transparent)]
    Engine(#[from] flexbios_engine::EngineError),

    #[error("unknown command: {resource}.{op}")]
    UnknownAction { resource: String, op: String },

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BiosError {
    /// The fixed wire code this error maps to, per spec.md §7's table.
    pub fn code(&self) -> ResponseCode {
        match self {
            BiosError::Core(kind) => kind.code(),
            BiosError::UnknownAction { .. } => ResponseCode::UnknownCommand,
            BiosError::InvalidParams(_) => ResponseCode::InvalidParams,
            BiosError::Bus(crate::bus::BusError::Timeout { .. }) => ResponseCode::GenericError,
            _ => ResponseCode::GenericError,
        }
    }

    /// Build the response envelope a dispatch handler sends back, per
    /// spec's "handlers always produce the envelope themselves" policy.
    pub fn to_envelope(&self) -> Envelope {
        Envelope::error(self.code(), serde_json::Value::String(self.to_string()))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
