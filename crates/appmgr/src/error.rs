// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The AppManager error taxonomy. `InstallFailed` carries the last
//! completed step so operators can recover without re-deriving where the
//! partial install state was left.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppMgrError {
    #[error("app {name} version {version} not found in library")]
    NotInLibrary { name: String, version: String },

    #[error("app {name} version {version} is not installed")]
    NotInstalled { name: String, version: String },

    #[error("no backup for {name} version {version}")]
    NoBackup { name: String, version: String },

    #[error("no app with id {0}")]
    NotFound(String),

    #[error("install failed after completing step '{step}': {source}")]
    InstallFailed { step: &'static str, source: Box<dyn std::error::Error + Send + Sync> },

    #[error(transparent)]
    Adapter(#[from] flexbios_adapters::AdapterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
