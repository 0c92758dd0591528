// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The real [`MessageBus`] implementation, over an `async_nats::Client`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;

use flexbios_storage::{NatsObjectStore, ObjectStore};

use super::{nats_err, BoxStream, BusError, BusMessage, Handler, MessageBus};

fn to_bus_message(msg: async_nats::Message) -> BusMessage {
    let headers = msg
        .headers
        .map(|h| h.iter().map(|(k, v)| (k.to_string(), v.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(","))).collect())
        .unwrap_or_default();
    BusMessage {
        subject: msg.subject.to_string(),
        reply: msg.reply.map(|s| s.to_string()),
        payload: msg.payload.to_vec(),
        headers,
    }
}

/// Wraps one NATS connection, shared by the BIOS supervisor, the
/// [`crate::forwarder::Forwarder`], and the client library.
pub struct NatsBus {
    client: async_nats::Client,
    object_store: Arc<NatsObjectStore>,
}

impl NatsBus {
    pub async fn connect(url: &str) -> Result<Self, BusError> {
        let client = async_nats::connect(url).await.map_err(nats_err)?;
        let jetstream = async_nats::jetstream::new(client.clone());
        Ok(Self { client, object_store: Arc::new(NatsObjectStore::new(jetstream)) })
    }
}

#[async_trait]
impl MessageBus for NatsBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError> {
        self.client.publish(subject.to_string(), payload.into()).await.map_err(nats_err)?;
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> Result<BoxStream, BusError> {
        let sub = self.client.subscribe(subject.to_string()).await.map_err(nats_err)?;
        Ok(Box::pin(sub.map(to_bus_message)))
    }

    async fn queue_subscribe(&self, subject: &str, queue: &str) -> Result<BoxStream, BusError> {
        let sub =
            self.client.queue_subscribe(subject.to_string(), queue.to_string()).await.map_err(nats_err)?;
        Ok(Box::pin(sub.map(to_bus_message)))
    }

    async fn request(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<BusMessage, BusError> {
        let subject = subject.to_string();
        let fut = self.client.request(subject.clone(), payload.into());
        match tokio::time::timeout(timeout, fut).await {
            Ok(Ok(msg)) => Ok(to_bus_message(msg)),
            Ok(Err(err)) => Err(nats_err(err)),
            Err(_) => Err(BusError::Timeout { subject, timeout }),
        }
    }

    async fn request_all(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<Vec<BusMessage>, BusError> {
        let inbox = self.client.new_inbox();
        let mut replies = self.client.subscribe(inbox.clone()).await.map_err(nats_err)?;
        self.client
            .publish_with_reply(subject.to_string(), inbox.clone(), payload.into())
            .await
            .map_err(nats_err)?;
        self.client.flush().await.map_err(nats_err)?;

        let mut collected = Vec::new();
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            match tokio::time::timeout(remaining, replies.next()).await {
                Ok(Some(msg)) => collected.push(to_bus_message(msg)),
                Ok(None) | Err(_) => break,
            }
        }
        Ok(collected)
    }

    async fn subscribe_with_respond(&self, subject: &str, handler: Handler) -> Result<(), BusError> {
        let mut sub = self.client.subscribe(subject.to_string()).await.map_err(nats_err)?;
        let client = self.client.clone();
        tokio::spawn(async move {
            while let Some(msg) = sub.next().await {
                let Some(reply) = msg.reply.clone() else { continue };
                let bus_msg = to_bus_message(msg);
                let response = handler(bus_msg).await;
                if let Err(err) = client.publish(reply, response.into()).await {
                    tracing::warn!(%err, "failed to publish subscribe_with_respond reply");
                }
            }
        });
        Ok(())
    }

    fn object_store(&self) -> Arc<dyn ObjectStore> {
        self.object_store.clone()
    }
}
