// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors shared by every adapter in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invalid action: {0}")]
    InvalidAction(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Exec(#[from] flexbios_exec::ExecError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
