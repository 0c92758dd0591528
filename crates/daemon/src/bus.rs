// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `MessageBus`: the transport-agnostic pub/sub/request interface the BIOS
//! supervisor, [`crate::forwarder::Forwarder`], and client library all
//! depend on instead of a concrete NATS type.
//!
//! Grounded on `natlib/base.go`'s `NatLib` interface
//! (`Publish`/`Subscribe`/`SubscribeWithRespond`/`RequestAll`/`Close`),
//! generalized to an async trait object so a real NATS connection and an
//! in-process test double share one call surface — the same shape as the
//! teacher's `AgentAdapter` trait-object pattern.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::Stream;
use thiserror::Error;

use flexbios_storage::ObjectStore;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("request to {subject} timed out after {timeout:?}")]
    Timeout { subject: String, timeout: Duration },

    #[error("no responder for {0}")]
    NoResponder(String),

    #[error("nats error: {0}")]
    Nats(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Collapses any of `async_nats`'s distinct error types (connect/publish/
/// subscribe/request each have their own) into one `BusError` variant.
pub(crate) fn nats_err(err: impl std::fmt::Display) -> BusError {
    BusError::Nats(err.to_string())
}

/// One message in flight on the bus: a subject, an optional reply subject
/// (present on requests), the payload, and a header map (carries things
/// like the HTTP proxy's `Debug` flag across the bus).
#[derive(Debug, Clone)]
pub struct BusMessage {
    pub subject: String,
    pub reply: Option<String>,
    pub payload: Vec<u8>,
    pub headers: HashMap<String, String>,
}

impl BusMessage {
    pub fn new(subject: impl Into<String>, payload: Vec<u8>) -> Self {
        Self { subject: subject.into(), reply: None, payload, headers: HashMap::new() }
    }
}

pub type BoxStream = Pin<Box<dyn Stream<Item = BusMessage> + Send>>;
type RespondFuture = Pin<Box<dyn Future<Output = Vec<u8>> + Send>>;

/// A subscribe-with-respond callback: takes the inbound message, returns
/// the bytes to publish back to its reply subject.
pub type Handler = Arc<dyn Fn(BusMessage) -> RespondFuture + Send + Sync>;

#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError>;

    async fn subscribe(&self, subject: &str) -> Result<BoxStream, BusError>;

    async fn queue_subscribe(&self, subject: &str, queue: &str) -> Result<BoxStream, BusError>;

    async fn request(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<BusMessage, BusError>;

    /// Fans a request out to every live responder and collects replies
    /// arriving on a private ephemeral subject until `timeout` elapses,
    /// an ask-everyone-gather-what-answers fan-out rather than a single
    /// first-reply request.
    async fn request_all(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<Vec<BusMessage>, BusError>;

    /// Subscribes to `subject` and, for each inbound message carrying a
    /// reply subject, publishes `handler`'s return value back to it.
    /// The BIOS dispatch registry registers one of these per subject
    /// family instead of hand-rolling an accept-loop per handler.
    async fn subscribe_with_respond(&self, subject: &str, handler: Handler) -> Result<(), BusError>;

    /// The object-store facade sharing this bus's underlying connection,
    /// mirroring `natsStoreInit`'s single JetStream context reused for
    /// both pub/sub and object storage.
    fn object_store(&self) -> Arc<dyn ObjectStore>;
}

mod local;
mod nats;

pub use local::LocalBus;
pub use nats::NatsBus;

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
