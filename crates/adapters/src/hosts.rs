// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The host-registry facade the ScriptEngine's `hosts` binding and BIOS's
//! git-manager handlers go through.
//!
//! Grounded on `original_source/app/services/v1/host/host.go` for the
//! field shape. The registry itself (JWT auth, relational persistence) is
//! out of scope here — this crate only owns the narrow interface
//! the core consumes.

use async_trait::async_trait;
use flexbios_core::Host;

use crate::error::AdapterError;

#[async_trait]
pub trait HostsClient: Send + Sync {
    async fn get_host(&self, uuid: &str) -> Result<Option<Host>, AdapterError>;
    async fn create_host(&self, host: Host) -> Result<Host, AdapterError>;
    async fn list_hosts(&self) -> Result<Vec<Host>, AdapterError>;
}

/// Talks to the out-of-scope admin service's host registry over HTTP.
pub struct HttpHostsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpHostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), client: reqwest::Client::new() }
    }
}

#[async_trait]
impl HostsClient for HttpHostsClient {
    async fn get_host(&self, uuid: &str) -> Result<Option<Host>, AdapterError> {
        let url = format!("{}/hosts/{uuid}", self.base_url);
        let resp = self.client.get(url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(resp.error_for_status()?.json::<Host>().await?))
    }

    async fn create_host(&self, host: Host) -> Result<Host, AdapterError> {
        let url = format!("{}/hosts", self.base_url);
        let resp = self.client.post(url).json(&host).send().await?.error_for_status()?;
        Ok(resp.json::<Host>().await?)
    }

    async fn list_hosts(&self) -> Result<Vec<Host>, AdapterError> {
        let url = format!("{}/hosts", self.base_url);
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.json::<Vec<Host>>().await?)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHostsClient;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{AdapterError, Host, HostsClient};

    /// In-memory host registry for `engine`/`daemon` test suites.
    #[derive(Clone, Default)]
    pub struct FakeHostsClient {
        hosts: Arc<Mutex<Vec<Host>>>,
    }

    impl FakeHostsClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, host: Host) {
            self.hosts.lock().push(host);
        }
    }

    #[async_trait]
    impl HostsClient for FakeHostsClient {
        async fn get_host(&self, uuid: &str) -> Result<Option<Host>, AdapterError> {
            Ok(self.hosts.lock().iter().find(|h| h.uuid == uuid).cloned())
        }

        async fn create_host(&self, host: Host) -> Result<Host, AdapterError> {
            self.hosts.lock().push(host.clone());
            Ok(host)
        }

        async fn list_hosts(&self) -> Result<Vec<Host>, AdapterError> {
            Ok(self.hosts.lock().clone())
        }
    }
}

#[cfg(test)]
#[path = "hosts_tests.rs"]
mod tests;
