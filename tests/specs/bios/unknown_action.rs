//! A subject matching a subscribed family but an unregistered op responds
//! with the 902 `UnknownAction` envelope rather than timing out.

use std::time::Duration;

use crate::prelude::boot_node;

#[tokio::test]
async fn unregistered_systemctl_op_responds_with_902() {
    let tmp = tempfile::tempdir().unwrap();
    let node = boot_node("node-unknown", tmp.path()).await;

    let reply = node
        .bus
        .request("node-unknown.get.system.systemctl.frobnicate", Vec::new(), Duration::from_secs(2))
        .await
        .unwrap();
    let envelope = flexbios_wire::Envelope::from_bytes(&reply.payload).unwrap();
    assert_eq!(envelope.code, 902);
}

#[tokio::test]
async fn unregistered_store_op_responds_with_902() {
    let tmp = tempfile::tempdir().unwrap();
    let node = boot_node("node-unknown-2", tmp.path()).await;

    let reply = node
        .bus
        .request("node-unknown-2.post.system.store.rename.object", b"{}".to_vec(), Duration::from_secs(2))
        .await
        .unwrap();
    let envelope = flexbios_wire::Envelope::from_bytes(&reply.payload).unwrap();
    assert_eq!(envelope.code, 902);
}
