// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `BiosSupervisor`: the single instance per host that owns every
//! collaborator (bus, app manager, rule engine, adapters) and answers
//! every bios-scoped subject family except `{uuid}.proxy.>`, which
//! belongs to [`crate::forwarder::Forwarder`].

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use flexbios_adapters::{GitDownloader, HostsClient, SystemctlAdapter};
use flexbios_appmgr::{AppManager, AppManagerConfig};
use flexbios_core::Subject;
use flexbios_engine::RuleEngine;
use flexbios_storage::ObjectStore;
use flexbios_wire::{Envelope, StoreRequest};

use crate::bus::{BusMessage, Handler, MessageBus};
use crate::config::BiosConfig;
use crate::error::BiosError;

mod handlers;
mod registry;

pub use registry::DispatchFn;

/// Owns every collaborator a dispatch handler might need and the
/// `(resource, op)` table built once at construction.
pub struct BiosSupervisor {
    pub global_uuid: String,
    pub config: BiosConfig,
    pub bus: Arc<dyn MessageBus>,
    pub app_manager: AppManager,
    pub rule_engine: RuleEngine,
    pub systemctl: Arc<dyn SystemctlAdapter>,
    pub object_store: Arc<dyn ObjectStore>,
    pub git_downloader: Arc<dyn GitDownloader>,
    dispatch_table: HashMap<(&'static str, &'static str), DispatchFn>,
}

impl BiosSupervisor {
    pub fn new(
        config: BiosConfig,
        bus: Arc<dyn MessageBus>,
        systemctl: Arc<dyn SystemctlAdapter>,
        git_downloader: Arc<dyn GitDownloader>,
        hosts: Arc<dyn HostsClient>,
    ) -> Result<Arc<Self>, BiosError> {
        let object_store = bus.object_store();
        let app_manager_config = AppManagerConfig {
            root_path: config.apps_root(),
            system_path: std::path::PathBuf::from(&config.system_path),
            file_name_with_version: false,
        };
        let app_manager = AppManager::new(app_manager_config, systemctl.clone())?;
        let rule_engine = RuleEngine::new(hosts, systemctl.clone());

        Ok(Arc::new(Self {
            global_uuid: config.id.clone(),
            config,
            bus,
            app_manager,
            rule_engine,
            systemctl,
            object_store,
            git_downloader,
            dispatch_table: registry::build(),
        }))
    }

    /// Subscribes every subject family spec.md §4.8 lists, plus
    /// `{uuid}.post.system.rule.*` routing into the `RuleEngine` (spec
    /// §4.7), except `{uuid}.proxy.>`, owned by the forwarder instead.
    pub async fn subscribe_all(self: &Arc<Self>) -> Result<(), BiosError> {
        let uuid = self.global_uuid.clone();

        for pattern in [
            format!("{uuid}.get.system.systemctl.*"),
            format!("{uuid}.post.system.systemctl.*"),
            format!("{uuid}.get.apps.manager.*"),
            format!("{uuid}.post.apps.manager.*"),
            format!("{uuid}.get.git.manager.*"),
            format!("{uuid}.post.git.manager.*"),
            format!("{uuid}.post.system.store.*"),
            format!("{uuid}.post.system.rule.*"),
        ] {
            self.install_dispatch_subscription(pattern).await?;
        }

        self.install_ping_subscription("global.get.system.ping".to_string()).await?;
        self.install_ping_subscription(format!("{uuid}.get.system.ping")).await?;
        self.install_legacy_store_subscription(format!("bios.{uuid}.store")).await?;

        Ok(())
    }

    async fn install_dispatch_subscription(self: &Arc<Self>, pattern: String) -> Result<(), BiosError> {
        let sup = self.clone();
        let handler: Handler = Arc::new(move |msg: BusMessage| {
            let sup = sup.clone();
            Box::pin(async move { sup.dispatch(&msg.subject, &msg.payload).await.to_bytes().unwrap_or_default() })
        });
        self.bus.subscribe_with_respond(&pattern, handler).await?;
        Ok(())
    }

    async fn install_ping_subscription(self: &Arc<Self>, pattern: String) -> Result<(), BiosError> {
        let sup = self.clone();
        let handler: Handler = Arc::new(move |_msg: BusMessage| {
            let sup = sup.clone();
            Box::pin(async move { handlers::ping::reply(&sup) })
        });
        self.bus.subscribe_with_respond(&pattern, handler).await?;
        Ok(())
    }

    async fn install_legacy_store_subscription(self: &Arc<Self>, pattern: String) -> Result<(), BiosError> {
        let sup = self.clone();
        let handler: Handler = Arc::new(move |msg: BusMessage| {
            let sup = sup.clone();
            Box::pin(async move { sup.dispatch_legacy_store(&msg.payload).await.to_bytes().unwrap_or_default() })
        });
        self.bus.subscribe_with_respond(&pattern, handler).await?;
        Ok(())
    }

    /// Resolves `(resource, op)` from the subject tail and the dispatch
    /// table, falling back to a body `action` field, and always produces
    /// an envelope — errors are folded into [`BiosError::to_envelope`]
    /// rather than propagated, since a subscribe-respond handler has no
    /// other way to report failure than the reply payload itself.
    pub async fn dispatch(self: &Arc<Self>, subject: &str, payload: &[u8]) -> Envelope {
        match self.try_dispatch(subject, payload).await {
            Ok(envelope) => envelope,
            Err(err) => err.to_envelope(),
        }
    }

    async fn try_dispatch(self: &Arc<Self>, subject: &str, payload: &[u8]) -> Result<Envelope, BiosError> {
        let subj = Subject::new(subject.to_string());
        let segments = subj.parse();
        let tail = segments.get(2..).map(|s| s.join(".")).unwrap_or_default();
        let (resource, op) = registry::split_resource_op(&tail)
            .ok_or_else(|| BiosError::UnknownAction { resource: tail.clone(), op: String::new() })?;

        let body: Value = if payload.is_empty() { Value::Null } else { serde_json::from_slice(payload)? };
        let body_action = body.get("action").and_then(|v| v.as_str());

        let handler = self
            .dispatch_table
            .get(&(resource, op.as_str()))
            .or_else(|| body_action.and_then(|action| self.dispatch_table.get(&(resource, action))));

        match handler {
            Some(handler) => handler(self.clone(), body).await,
            None => Err(BiosError::UnknownAction { resource: resource.to_string(), op }),
        }
    }

    async fn dispatch_legacy_store(self: &Arc<Self>, payload: &[u8]) -> Envelope {
        match self.try_dispatch_legacy_store(payload).await {
            Ok(envelope) => envelope,
            Err(err) => err.to_envelope(),
        }
    }

    async fn try_dispatch_legacy_store(self: &Arc<Self>, payload: &[u8]) -> Result<Envelope, BiosError> {
        let req: StoreRequest = serde_json::from_slice(payload)?;
        let action = req
            .action
            .clone()
            .ok_or_else(|| BiosError::InvalidParams("legacy store envelope requires action".to_string()))?;
        let handler = self.dispatch_table.get(&("system.store", action.as_str())).ok_or_else(|| {
            BiosError::UnknownAction { resource: "system.store".to_string(), op: action.clone() }
        })?;
        let body = serde_json::to_value(&req)?;
        handler(self.clone(), body).await
    }
}

/// A `BiosSupervisor` wired entirely to fakes/`LocalBus`, plus handles onto
/// the fakes so tests can seed fixtures and inspect recorded calls. Shared
/// by this module's own tests and every handler submodule's `_tests.rs`.
#[cfg(test)]
pub(crate) struct TestSupervisor {
    pub sup: Arc<BiosSupervisor>,
    pub systemctl: Arc<flexbios_adapters::FakeSystemctlAdapter>,
    pub git: Arc<flexbios_adapters::FakeGitDownloader>,
}

#[cfg(test)]
pub(crate) fn test_supervisor(root_path: std::path::PathBuf) -> TestSupervisor {
    use flexbios_adapters::{FakeGitDownloader, FakeHostsClient, FakeSystemctlAdapter};

    use crate::bus::LocalBus;
    use crate::config::StoreConfig;

    let config = BiosConfig {
        id: "node-test".to_string(),
        description: "test node".to_string(),
        nats_url: "nats://127.0.0.1:4222".to_string(),
        proxy_port: 4223,
        root_path: root_path.to_string_lossy().into_owned(),
        apps_path: String::new(),
        system_path: root_path.join("systemd").to_string_lossy().into_owned(),
        git_token: None,
        git_download_path: None,
        hosts_url: "http://127.0.0.1:8080".to_string(),
        http_addr: "127.0.0.1:0".to_string(),
        services: Vec::new(),
        store: StoreConfig::default(),
    };
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let systemctl = Arc::new(FakeSystemctlAdapter::new());
    let git = Arc::new(FakeGitDownloader::new());
    let hosts: Arc<dyn HostsClient> = Arc::new(FakeHostsClient::new());
    let sup = BiosSupervisor::new(config, bus, systemctl.clone(), git.clone(), hosts)
        .expect("test supervisor construction");
    TestSupervisor { sup, systemctl, git }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
