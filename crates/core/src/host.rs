// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The host record: one edge device identity, soft-deletable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered edge host.
///
/// `deleted_at` implements soft delete: a host is never dropped from the
/// store, only marked. Callers that enumerate active hosts must filter on
/// `is_active()` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub uuid: String,
    pub name: String,
    pub ip: String,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Host {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self { uuid: uuid.into(), name: name.into(), ip: ip.into(), deleted_at: None }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
