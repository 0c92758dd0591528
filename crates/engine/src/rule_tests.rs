use std::sync::Arc;
use std::time::Duration;

use flexbios_adapters::{FakeHostsClient, FakeSystemctlAdapter};

use super::RuleEngine;
use crate::error::EngineError;

fn test_engine() -> RuleEngine {
    RuleEngine::new(Arc::new(FakeHostsClient::new()), Arc::new(FakeSystemctlAdapter::new()))
}

#[tokio::test(flavor = "multi_thread")]
async fn run_and_destroy_returns_the_script_result() {
    let engine = test_engine();
    let result = engine
        .run_and_destroy("sum-rule", "1 + 2 + 3", serde_json::Map::new())
        .await
        .unwrap();
    assert_eq!(result.cast::<i64>(), 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_round_trips_within_one_invocation() {
    let engine = test_engine();
    let result = engine
        .run_and_destroy(
            "storage-rule",
            r#"init("count", 0); set("count", get("count") + 1); set("count", get("count") + 1); get("count")"#,
            serde_json::Map::new(),
        )
        .await
        .unwrap();
    assert_eq!(result.cast::<i64>(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn props_are_visible_to_the_script() {
    let engine = test_engine();
    let mut props = serde_json::Map::new();
    props.insert("threshold".to_string(), serde_json::json!(10));

    let result =
        engine.run_and_destroy("props-rule", "props.threshold + 5", props).await.unwrap();
    assert_eq!(result.cast::<i64>(), 15);
}

#[tokio::test(flavor = "multi_thread")]
async fn running_the_same_name_twice_concurrently_is_rejected() {
    let engine = Arc::new(test_engine());
    let long_script = "let x = 0; for i in 0..3_000_000 { x += i; } x";

    let slow_engine = engine.clone();
    let handle = tokio::spawn(async move {
        slow_engine.run_and_destroy("dup-rule", long_script, serde_json::Map::new()).await
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(engine.is_running("dup-rule"));

    let second = engine.run_and_destroy("dup-rule", "1", serde_json::Map::new()).await;
    assert!(matches!(second, Err(EngineError::AlreadyExists(name)) if name == "dup-rule"));

    handle.await.unwrap().unwrap();
    assert!(!engine.is_running("dup-rule"));
}

#[tokio::test(flavor = "multi_thread")]
async fn script_errors_are_reported_and_the_rule_is_still_freed() {
    let engine = test_engine();
    let err = engine.run_and_destroy("bad-rule", "1 / 0", serde_json::Map::new()).await;
    assert!(err.is_err());
    assert!(!engine.is_running("bad-rule"));
}
