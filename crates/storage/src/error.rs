// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage-facade error taxonomy.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object `{0}` not found")]
    NotFound(String),

    #[error("`{0}` exists and is not a directory")]
    NotADirectory(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("object store error: {0}")]
    Bus(String),
}

impl StorageError {
    pub fn bus(err: impl std::fmt::Display) -> Self {
        StorageError::Bus(err.to_string())
    }
}
