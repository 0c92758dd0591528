// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies for each subject family's `post` endpoints.
//!
//! Each type also accepts an `action` field as a fallback dispatch key, per
//! the dispatch policy: the subject's last segment is authoritative, but a
//! body `action` lets a CLI put the verb in the payload instead.

use serde::{Deserialize, Serialize};

/// Body for `{uuid}.post.system.store.*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRequest {
    #[serde(default)]
    pub action: Option<String>,
    pub store_name: String,
    #[serde(default)]
    pub object_name: Option<String>,
    /// Base64-encoded object bytes, present on `add.object`.
    #[serde(default)]
    pub data: Option<String>,
}

impl StoreRequest {
    pub fn decoded_data(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        use base64::Engine;
        self.data
            .as_deref()
            .map(|s| base64::engine::general_purpose::STANDARD.decode(s))
            .transpose()
    }
}

/// Body for `{uuid}.post.system.systemctl.*`.
///
/// A caller may reference the unit either by `name` directly or by
/// `(app_id, version)`, in which case `AppManager` resolves the unit name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemctlRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// The property name for a `show` request, e.g. `"NRestarts"`.
    #[serde(default)]
    pub property: Option<String>,
}

/// Body for `{uuid}.post.apps.manager.*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppManagerRequest {
    #[serde(default)]
    pub action: Option<String>,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body for `{uuid}.post.system.rule.*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRequest {
    #[serde(default)]
    pub action: Option<String>,
    pub name: String,
    pub script: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Body for `{uuid}.post.git.manager.*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitManagerRequest {
    #[serde(default)]
    pub action: Option<String>,
    pub owner: String,
    pub repo: String,
    pub tag: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod tests;
