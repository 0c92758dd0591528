// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use base64::Engine;
use serde_json::json;

use super::*;
use crate::bios::test_supervisor;

#[tokio::test]
async fn add_then_get_object_round_trips_through_base64() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());
    let encoded = base64::engine::general_purpose::STANDARD.encode(b"hello world");

    let add_envelope = add_object(
        harness.sup.clone(),
        json!({"store_name": "archives", "object_name": "greeting.txt", "data": encoded}),
    )
    .await
    .unwrap();
    assert!(add_envelope.is_success());

    let get_envelope =
        get_object(harness.sup, json!({"store_name": "archives", "object_name": "greeting.txt"}))
            .await
            .unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(get_envelope.payload.as_str().unwrap())
        .unwrap();
    assert_eq!(decoded, b"hello world");
}

#[tokio::test]
async fn add_object_requires_data() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());

    let err = add_object(harness.sup, json!({"store_name": "archives", "object_name": "x"}))
        .await
        .unwrap_err();
    assert!(matches!(err, BiosError::InvalidParams(_)));
}

#[tokio::test]
async fn get_stores_lists_buckets_created_by_add_object() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());
    let encoded = base64::engine::general_purpose::STANDARD.encode(b"data");
    add_object(
        harness.sup.clone(),
        json!({"store_name": "archives", "object_name": "x", "data": encoded}),
    )
    .await
    .unwrap();

    let envelope = get_stores(harness.sup, json!(null)).await.unwrap();
    let buckets = envelope.payload.as_array().unwrap();
    assert!(buckets.iter().any(|b| b == "archives"));
}

#[tokio::test]
async fn delete_object_removes_it() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());
    let encoded = base64::engine::general_purpose::STANDARD.encode(b"data");
    add_object(
        harness.sup.clone(),
        json!({"store_name": "archives", "object_name": "x", "data": encoded}),
    )
    .await
    .unwrap();

    let envelope =
        delete_object(harness.sup.clone(), json!({"store_name": "archives", "object_name": "x"}))
            .await
            .unwrap();
    assert!(envelope.is_success());

    let err = get_object(harness.sup, json!({"store_name": "archives", "object_name": "x"}))
        .await
        .unwrap_err();
    assert!(matches!(err, BiosError::Storage(_)));
}
