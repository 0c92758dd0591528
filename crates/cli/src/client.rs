// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `BiosClient`: typed wrappers over [`MessageBus::request`]/`request_all`
//! for every bios-scoped subject family spec.md §4.8 lists, grounded on
//! the teacher's `client_queries*.rs` pattern (typed methods instead of
//! hand-built subjects at each call site).

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use flexbios_core::{Scope, Subject, SubjectBuilder, Verb};
use flexbios_daemon::bus::{BusError, MessageBus};
use flexbios_wire::Envelope;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Bus(#[from] BusError),

    #[error("malformed envelope in reply: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("{0}")]
    Remote(Envelope),
}

/// Turns a non-success envelope into a [`ClientError::Remote`], leaving a
/// success envelope untouched. Every command handler runs its reply
/// through this before printing so a 400/500/902 reply becomes a non-zero
/// exit rather than being printed as if it had succeeded.
pub fn require_success(envelope: Envelope) -> Result<Envelope, ClientError> {
    if envelope.is_success() {
        Ok(envelope)
    } else {
        Err(ClientError::Remote(envelope))
    }
}

/// Thin typed wrapper over a bus connection, bound to one target host's
/// `globalUUID`. Used by every CLI subcommand and by the end-to-end test
/// suite against a [`flexbios_daemon::bus::LocalBus`].
pub struct BiosClient {
    bus: Arc<dyn MessageBus>,
    uuid: String,
    timeout: Duration,
}

impl BiosClient {
    pub fn new(bus: Arc<dyn MessageBus>, uuid: impl Into<String>, timeout: Duration) -> Self {
        Self { bus, uuid: uuid.into(), timeout }
    }

    fn builder(&self) -> SubjectBuilder {
        SubjectBuilder::new(Scope::Bios, self.uuid.clone(), String::new())
    }

    async fn request(&self, subject: &Subject, body: Value) -> Result<Envelope, ClientError> {
        let payload = if body.is_null() { Vec::new() } else { serde_json::to_vec(&body)? };
        let msg = self.bus.request(subject.as_str(), payload, self.timeout).await?;
        Ok(Envelope::from_bytes(&msg.payload)?)
    }

    /// `{uuid}.get.system.ping`.
    pub async fn ping(&self) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Get, "system", "ping");
        self.request(&subject, Value::Null).await
    }

    /// `global.get.system.ping`, fanned out to every live responder.
    pub async fn ping_all(&self) -> Result<Vec<Envelope>, ClientError> {
        let subject = SubjectBuilder::global_subject(Verb::Get, "system", "ping");
        let replies = self.bus.request_all(subject.as_str(), Vec::new(), self.timeout).await?;
        replies.iter().map(|msg| Ok(Envelope::from_bytes(&msg.payload)?)).collect()
    }

    /// `{uuid}.get.apps.manager.installed`.
    pub async fn apps_installed(&self) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Get, "apps.manager", "installed");
        self.request(&subject, Value::Null).await
    }

    /// `{uuid}.get.apps.manager.library`.
    pub async fn apps_library(&self) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Get, "apps.manager", "library");
        self.request(&subject, Value::Null).await
    }

    /// `{uuid}.post.apps.manager.install`.
    pub async fn app_install(&self, name: &str, version: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "apps.manager", "install");
        self.request(&subject, json!({ "name": name, "version": version })).await
    }

    /// `{uuid}.post.apps.manager.uninstall`.
    pub async fn app_uninstall(&self, name: &str, version: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "apps.manager", "uninstall");
        self.request(&subject, json!({ "name": name, "version": version })).await
    }

    /// `{uuid}.post.apps.manager.systemctl`: runs `action` against an
    /// installed app's unit (the verb travels in the body, not the
    /// subject tail, since `systemctl` here is the `op` — see
    /// `flexbios_daemon::bios::handlers::apps::systemctl`).
    pub async fn app_systemctl(&self, name: &str, version: &str, action: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "apps.manager", "systemctl");
        self.request(&subject, json!({ "name": name, "version": version, "action": action })).await
    }

    /// `{uuid}.post.system.systemctl.{action}` / `{uuid}.get.system.systemctl.{action}`
    /// against a bare unit name.
    pub async fn systemctl(&self, verb: Verb, unit: &str, action: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(verb, "system.systemctl", action);
        self.request(&subject, json!({ "name": unit })).await
    }

    /// `{uuid}.get.system.systemctl.show` with a `property` name.
    pub async fn systemctl_show(&self, unit: &str, property: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Get, "system.systemctl", "show");
        self.request(&subject, json!({ "name": unit, "property": property })).await
    }

    /// `{uuid}.post.git.manager.download`: downloads `asset_name` from a
    /// tagged GitHub release into the app library.
    pub async fn github_download(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
        asset_name: &str,
        token: Option<&str>,
    ) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "git.manager", "download");
        self.request(
            &subject,
            json!({ "owner": owner, "repo": repo, "tag": tag, "asset_name": asset_name, "token": token }),
        )
        .await
    }

    /// `{uuid}.post.system.store.get.stores`.
    pub async fn store_get_stores(&self) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "system.store", "get.stores");
        self.request(&subject, json!({ "store_name": "" })).await
    }

    /// `{uuid}.post.system.store.add.object`, carrying base64-encoded
    /// file bytes read from `path`. The server's current `add.object`
    /// handler always overwrites (see `handlers::store::add_object`), so
    /// `overwrite` only shapes future server-side behavior and is still
    /// forwarded for wire-surface parity with spec.md §6's CLI list.
    pub async fn store_add_object(
        &self,
        store: &str,
        name: &str,
        bytes: Vec<u8>,
        overwrite: bool,
    ) -> Result<Envelope, ClientError> {
        use base64::Engine;
        let subject = self.builder().build_subject(Verb::Post, "system.store", "add.object");
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        self.request(
            &subject,
            json!({ "store_name": store, "object_name": name, "data": data, "overwrite": overwrite }),
        )
        .await
    }

    /// `{uuid}.post.system.store.download.object`.
    pub async fn store_download_object(&self, store: &str, name: &str) -> Result<Envelope, ClientError> {
        let subject = self.builder().build_subject(Verb::Post, "system.store", "download.object");
        self.request(&subject, json!({ "store_name": store, "object_name": name })).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
