//! Two live `BiosSupervisor`s bridged by a `Forwarder`: a request sent to
//! `{uuid}.proxy.{appID}.{verb}.{resource}.{op}` on the source bus reaches
//! an app-scoped responder on the target bus and its reply round-trips
//! back through the proxy subject.

use std::sync::Arc;
use std::time::Duration;

use flexbios_daemon::bus::{LocalBus, MessageBus};
use flexbios_daemon::{Forwarder, ForwarderConfig};

use crate::prelude::boot_node_on;

#[tokio::test]
async fn proxy_request_reaches_an_app_scoped_responder_on_the_target_bus() {
    let source_bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let target_bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());

    let tmp = tempfile::tempdir().unwrap();
    let _source_node = boot_node_on(source_bus.clone(), "node-source", tmp.path()).await;

    let handler: flexbios_daemon::bus::Handler = Arc::new(|_msg: flexbios_daemon::bus::BusMessage| {
        Box::pin(async move { serde_json::json!({"sum": 42}).to_string().into_bytes() })
    });
    target_bus.subscribe_with_respond("math-app.post.math.add.run", handler).await.unwrap();

    let forwarder = Arc::new(Forwarder::new(
        source_bus.clone(),
        target_bus,
        ForwarderConfig::new("node-source"),
    ));
    forwarder.run().await.unwrap();
    tokio::task::yield_now().await;

    let reply = source_bus
        .request("node-source.proxy.math-app.post.math.add.run", b"{}".to_vec(), Duration::from_secs(2))
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&reply.payload).unwrap();
    assert_eq!(body["sum"], 42);
}
