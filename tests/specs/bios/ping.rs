//! `global.get.system.ping` fans out to every live responder on the bus.

use std::sync::Arc;

use flexbios_daemon::bus::{LocalBus, MessageBus};

use crate::prelude::{boot_node_on, client_for};

#[tokio::test]
async fn ping_all_collects_a_reply_from_every_node_on_the_bus() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let tmp_a = tempfile::tempdir().unwrap();
    let tmp_b = tempfile::tempdir().unwrap();

    let node_a = boot_node_on(bus.clone(), "node-a", tmp_a.path()).await;
    let node_b = boot_node_on(bus.clone(), "node-b", tmp_b.path()).await;

    let client = client_for(&node_a, "node-a");
    let replies = client.ping_all().await.unwrap();

    assert_eq!(replies.len(), 2);
    let mut uuids: Vec<String> =
        replies.iter().map(|e| e.payload.as_str().unwrap().to_string()).collect();
    uuids.sort();
    assert_eq!(uuids, vec!["node-a".to_string(), "node-b".to_string()]);

    drop(node_b);
}

#[tokio::test]
async fn ping_targets_only_the_addressed_node() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let tmp_a = tempfile::tempdir().unwrap();
    let tmp_b = tempfile::tempdir().unwrap();

    let node_a = boot_node_on(bus.clone(), "node-a", tmp_a.path()).await;
    let _node_b = boot_node_on(bus, "node-b", tmp_b.path()).await;

    let client = client_for(&node_a, "node-a");
    let envelope = client.ping().await.unwrap();
    assert_eq!(envelope.payload, serde_json::json!("node-a"));
}
