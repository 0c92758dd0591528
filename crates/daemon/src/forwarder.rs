// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridges a source [`MessageBus`] to a target bus, re-routing
//! proxy-scoped subjects onto the target's app-scoped subjects.
//!
//! Grounded on `modules/bios/proxy.go`: subscribes
//! `{global_uuid}.proxy.>` on the source bus under the queue group
//! `rql_queue` (kept verbatim as the default so parallel BIOS instances
//! load-balance), strips the `proxy.` marker, and republishes the tail as
//! a request on the target bus.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;

use flexbios_core::Subject;
use flexbios_wire::Envelope;

use crate::bus::MessageBus;

/// Default queue group name the original Go used for proxy subscriptions.
pub const DEFAULT_QUEUE_GROUP: &str = "rql_queue";

#[derive(Debug, Clone)]
pub struct ForwarderConfig {
    pub global_uuid: String,
    pub queue_group: String,
    pub timeout: Duration,
}

impl ForwarderConfig {
    pub fn new(global_uuid: impl Into<String>) -> Self {
        Self {
            global_uuid: global_uuid.into(),
            queue_group: DEFAULT_QUEUE_GROUP.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Bridges `source` to `target`, each an independent [`MessageBus`]
/// connection. `Forwarder::shutdown` drops the target connection.
pub struct Forwarder {
    source: Arc<dyn MessageBus>,
    target: Arc<dyn MessageBus>,
    config: ForwarderConfig,
}

impl Forwarder {
    pub fn new(source: Arc<dyn MessageBus>, target: Arc<dyn MessageBus>, config: ForwarderConfig) -> Self {
        Self { source, target, config }
    }

    /// Subscribes on the source bus and spawns the forwarding loop. Returns
    /// once the subscription is established; forwarding itself runs in a
    /// spawned task for the lifetime of the process (or until `shutdown`).
    pub async fn run(self: Arc<Self>) -> Result<(), crate::bus::BusError> {
        let pattern = format!("{}.proxy.>", self.config.global_uuid);
        let mut sub = self.source.queue_subscribe(&pattern, &self.config.queue_group).await?;
        let this = self.clone();
        tokio::spawn(async move {
            while let Some(msg) = sub.next().await {
                let this = this.clone();
                tokio::spawn(async move { this.forward_one(msg).await });
            }
        });
        Ok(())
    }

    async fn forward_one(&self, msg: crate::bus::BusMessage) {
        let subject = Subject::new(msg.subject.clone());
        let Some(tail) = subject.extract_after_proxy() else {
            tracing::warn!(subject = %msg.subject, "proxy subject missing `proxy.` marker");
            return;
        };

        let result = self.target.request(tail, msg.payload.clone(), self.config.timeout).await;
        let Some(reply_subject) = msg.reply.clone() else { return };

        let response = match result {
            Ok(reply) => reply.payload,
            Err(err) => {
                tracing::warn!(%err, tail, "forwarder target request failed");
                Envelope::error(flexbios_core::ResponseCode::GenericError, serde_json::Value::String(err.to_string()))
                    .to_bytes()
                    .unwrap_or_default()
            }
        };

        if let Err(err) = self.source.publish(&reply_subject, response).await {
            tracing::warn!(%err, "failed to publish forwarder reply");
        }
    }

    /// Drops the target bus connection. `source` is owned by the caller
    /// (typically also `BiosSupervisor`) and outlives the forwarder.
    pub fn shutdown(self) {
        drop(self.target);
    }
}

#[cfg(test)]
#[path = "forwarder_tests.rs"]
mod tests;
