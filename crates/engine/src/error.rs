// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors a rule invocation can produce.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rule {0} is already running")]
    AlreadyExists(String),

    #[error("rule {0} does not exist")]
    NotFound(String),

    #[error("script error: {0}")]
    Script(String),
}

impl From<Box<rhai::EvalAltResult>> for EngineError {
    fn from(err: Box<rhai::EvalAltResult>) -> Self {
        EngineError::Script(err.to_string())
    }
}
