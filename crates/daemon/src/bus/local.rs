// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! An in-process [`MessageBus`], no network involved.
//!
//! Grounded on the teacher's `EventBus` fan-out pattern
//! (`daemon/src/listener/mod.rs`'s event bus plumbing), generalized from a
//! single typed `Event` enum to arbitrary subjects carrying raw bytes. Used
//! by the integration test suite and by any deployment that wants to run
//! BIOS and a test app in the same process without a NATS server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::StreamExt;
use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc};
use tokio_stream::wrappers::{BroadcastStream, ReceiverStream};

use flexbios_storage::{FakeObjectStore, ObjectStore};

use super::{BoxStream, BusError, BusMessage, Handler, MessageBus};

/// One fan-out channel per subject (every subscriber sees every message),
/// plus a round-robin sender pool per (subject, queue) pair for
/// `queue_subscribe`.
#[derive(Default)]
struct Topics {
    fanout: HashMap<String, broadcast::Sender<BusMessage>>,
    queues: HashMap<(String, String), Vec<mpsc::UnboundedSender<BusMessage>>>,
}

/// In-process, no-network [`MessageBus`]. Every `publish` is delivered
/// synchronously to every live `broadcast` receiver and round-robined
/// across every live queue-group receiver for a matching subject pattern.
pub struct LocalBus {
    topics: Arc<Mutex<Topics>>,
    object_store: Arc<FakeObjectStore>,
    inbox_counter: AtomicU64,
}

impl Default for LocalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalBus {
    pub fn new() -> Self {
        Self {
            topics: Arc::new(Mutex::new(Topics::default())),
            object_store: Arc::new(FakeObjectStore::new()),
            inbox_counter: AtomicU64::new(0),
        }
    }

    fn next_inbox(&self) -> String {
        let n = self.inbox_counter.fetch_add(1, Ordering::Relaxed);
        format!("_INBOX.local.{n}")
    }

    fn fanout_sender(&self, subject: &str) -> broadcast::Sender<BusMessage> {
        let mut topics = self.topics.lock();
        topics
            .fanout
            .entry(subject.to_string())
            .or_insert_with(|| broadcast::channel(1024).0)
            .clone()
    }

    fn dispatch(&self, msg: &BusMessage) {
        let topics = self.topics.lock();
        for (subject, sender) in topics.fanout.iter() {
            if flexbios_core::Subject::new(msg.subject.clone()).matches(subject) {
                let _ = sender.send(msg.clone());
            }
        }
        drop(topics);

        // Queue groups: exactly one member per matching (subject pattern,
        // group) pair gets the message, round-robined by rotating the
        // vector so repeated deliveries fan across members.
        let mut topics = self.topics.lock();
        for ((subject, _group), senders) in topics.queues.iter_mut() {
            if !flexbios_core::Subject::new(msg.subject.clone()).matches(subject) {
                continue;
            }
            senders.retain(|s| !s.is_closed());
            if senders.is_empty() {
                continue;
            }
            let sender = senders.remove(0);
            let _ = sender.send(msg.clone());
            senders.push(sender);
        }
    }
}

#[async_trait]
impl MessageBus for LocalBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError> {
        self.dispatch(&BusMessage::new(subject, payload));
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> Result<BoxStream, BusError> {
        let sender = self.fanout_sender(subject);
        let stream = BroadcastStream::new(sender.subscribe()).filter_map(|r| async move { r.ok() });
        Ok(Box::pin(stream))
    }

    async fn queue_subscribe(&self, subject: &str, queue: &str) -> Result<BoxStream, BusError> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.topics
            .lock()
            .queues
            .entry((subject.to_string(), queue.to_string()))
            .or_default()
            .push(tx);
        Ok(Box::pin(ReceiverStream::new(rx)))
    }

    async fn request(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<BusMessage, BusError> {
        let inbox = self.next_inbox();
        let mut replies = self.subscribe(&inbox).await?;
        let mut msg = BusMessage::new(subject, payload);
        msg.reply = Some(inbox.clone());
        self.dispatch(&msg);

        match tokio::time::timeout(timeout, replies.next()).await {
            Ok(Some(reply)) => Ok(reply),
            Ok(None) | Err(_) => {
                Err(BusError::Timeout { subject: subject.to_string(), timeout })
            }
        }
    }

    async fn request_all(
        &self,
        subject: &str,
        payload: Vec<u8>,
        timeout: Duration,
    ) -> Result<Vec<BusMessage>, BusError> {
        let inbox = self.next_inbox();
        let mut replies = self.subscribe(&inbox).await?;
        let mut msg = BusMessage::new(subject, payload);
        msg.reply = Some(inbox.clone());
        self.dispatch(&msg);

        let mut collected = Vec::new();
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            match tokio::time::timeout(remaining, replies.next()).await {
                Ok(Some(reply)) => collected.push(reply),
                Ok(None) | Err(_) => break,
            }
        }
        Ok(collected)
    }

    async fn subscribe_with_respond(&self, subject: &str, handler: Handler) -> Result<(), BusError> {
        let mut sub = self.subscribe(subject).await?;
        let topics = self.topics.clone();
        tokio::spawn(async move {
            while let Some(msg) = sub.next().await {
                let Some(reply) = msg.reply.clone() else { continue };
                let response = handler(msg).await;
                let reply_msg = BusMessage::new(reply.clone(), response);
                let fanout = {
                    let topics = topics.lock();
                    topics.fanout.get(&reply).cloned()
                };
                if let Some(sender) = fanout {
                    let _ = sender.send(reply_msg);
                }
            }
        });
        Ok(())
    }

    fn object_store(&self) -> Arc<dyn ObjectStore> {
        self.object_store.clone()
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
