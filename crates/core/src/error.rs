// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed response-code table and error taxonomy shared by every crate
//! that can answer a bus request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A fixed numeric code carried in every response envelope.
///
/// The table is closed and ordinal values are wire-stable: do not renumber
/// existing variants, only append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResponseCode {
    Success = 200,
    InvalidParams = 400,
    TokenInvalid = 401,
    GenericError = 500,
    UnknownError = 900,
    UnknownCommand = 902,
    AuthMissingToken = 20001,
    AuthMalformedToken = 20002,
    AuthExpiredToken = 20003,
    AuthRevokedToken = 20004,
    AuthInsufficientScope = 20005,
    AuthUnknownSubject = 20006,
    AuthRateLimited = 20007,
    AuthHostMismatch = 20008,
    AuthUnknownReason = 20009,
}

impl ResponseCode {
    /// The human-readable message the original Go's `GetMsg` table returns
    /// for each code.
    pub fn message(self) -> &'static str {
        match self {
            ResponseCode::Success => "ok",
            ResponseCode::InvalidParams => "invalid params",
            ResponseCode::TokenInvalid => "token invalid",
            ResponseCode::GenericError => "generic error",
            ResponseCode::UnknownError => "Unknown error",
            ResponseCode::UnknownCommand => "Unknown command",
            ResponseCode::AuthMissingToken => "missing auth token",
            ResponseCode::AuthMalformedToken => "malformed auth token",
            ResponseCode::AuthExpiredToken => "expired auth token",
            ResponseCode::AuthRevokedToken => "revoked auth token",
            ResponseCode::AuthInsufficientScope => "insufficient scope",
            ResponseCode::AuthUnknownSubject => "unknown subject",
            ResponseCode::AuthRateLimited => "rate limited",
            ResponseCode::AuthHostMismatch => "host mismatch",
            ResponseCode::AuthUnknownReason => "unauthorized",
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ResponseCode {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            200 => ResponseCode::Success,
            400 => ResponseCode::InvalidParams,
            401 => ResponseCode::TokenInvalid,
            500 => ResponseCode::GenericError,
            900 => ResponseCode::UnknownError,
            902 => ResponseCode::UnknownCommand,
            20001 => ResponseCode::AuthMissingToken,
            20002 => ResponseCode::AuthMalformedToken,
            20003 => ResponseCode::AuthExpiredToken,
            20004 => ResponseCode::AuthRevokedToken,
            20005 => ResponseCode::AuthInsufficientScope,
            20006 => ResponseCode::AuthUnknownSubject,
            20007 => ResponseCode::AuthRateLimited,
            20008 => ResponseCode::AuthHostMismatch,
            20009 => ResponseCode::AuthUnknownReason,
            other => return Err(other),
        })
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        ResponseCode::try_from(value)
            .map_err(|v| serde::de::Error::custom(format!("unknown response code {v}")))
    }
}

/// The error taxonomy every dispatch handler returns into.
///
/// Each variant maps onto exactly one [`ResponseCode`] via [`BiosErrorKind::code`],
/// so a handler never has to pick a wire code by hand.
#[derive(Debug, Error)]
pub enum BiosErrorKind {
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("token invalid: {0}")]
    TokenInvalid(String),

    #[error("unknown command: {resource}.{op}")]
    UnknownCommand { resource: String, op: String },

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("unauthorized: {0}")]
    Unauthorized(ResponseCode),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BiosErrorKind {
    pub fn code(&self) -> ResponseCode {
        match self {
            BiosErrorKind::InvalidParams(_) => ResponseCode::InvalidParams,
            BiosErrorKind::TokenInvalid(_) => ResponseCode::TokenInvalid,
            BiosErrorKind::UnknownCommand { .. } => ResponseCode::UnknownCommand,
            BiosErrorKind::Unauthorized(code) => *code,
            BiosErrorKind::Timeout(_)
            | BiosErrorKind::Io(_)
            | BiosErrorKind::Json(_)
            | BiosErrorKind::Other(_) => ResponseCode::GenericError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
