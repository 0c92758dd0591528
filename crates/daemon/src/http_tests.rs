// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::bus::LocalBus;

async fn echo_responder(bus: &Arc<dyn MessageBus>, pattern: &str) {
    let handler: crate::bus::Handler = Arc::new(|msg: crate::bus::BusMessage| {
        Box::pin(async move {
            serde_json::json!({"echo": msg.subject, "len": msg.payload.len()}).to_string().into_bytes()
        })
    });
    bus.subscribe_with_respond(pattern, handler).await.unwrap();
}

#[test]
fn parse_timeout_header_supports_seconds_millis_and_micros() {
    assert_eq!(parse_timeout_header("2s"), Some(Duration::from_secs_f64(2.0)));
    assert_eq!(parse_timeout_header("250ms"), Some(Duration::from_millis(250)));
    assert_eq!(parse_timeout_header("500us"), Some(Duration::from_micros(500)));
    assert_eq!(parse_timeout_header("garbage"), None);
}

#[tokio::test]
async fn proxy_forwards_the_topic_as_a_dotted_subject() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    echo_responder(&bus, "node-1.widgets.create").await;
    let app = router(bus, Duration::from_secs(1));

    let request = Request::builder()
        .method("POST")
        .uri("/api/proxy/node-1/widgets/create")
        .body(Body::from("hello"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["echo"], "node-1.widgets.create");
    assert_eq!(body["len"], 5);
}

#[tokio::test]
async fn proxy_honors_the_x_timeout_header_and_reports_504_on_expiry() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    // No responder subscribed: the request always times out.
    let app = router(bus, Duration::from_secs(5));

    let request = Request::builder()
        .method("POST")
        .uri("/api/proxy/node-1/nobody/home")
        .header("x-timeout", "50ms")
        .body(Body::from(""))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn upload_requires_store_and_object_name_headers() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let app = router(bus, Duration::from_secs(1));

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload/node-1")
        .header("content-type", "multipart/form-data; boundary=X-BOUNDARY")
        .body(Body::from(multipart_body(b"file contents")))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_encodes_the_file_field_and_requests_add_object() {
    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    echo_responder(&bus, "node-1.post.system.store.add.object").await;
    let app = router(bus, Duration::from_secs(1));

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload/node-1")
        .header("content-type", "multipart/form-data; boundary=X-BOUNDARY")
        .header(STORE_NAME_HEADER, "archives")
        .header(OBJECT_NAME_HEADER, "greeting.txt")
        .body(Body::from(multipart_body(b"hello world")))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["echo"], "node-1.post.system.store.add.object");
}

fn multipart_body(file_contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(b"--X-BOUNDARY\r\n");
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=\"upload.bin\"\r\n");
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(file_contents);
    body.extend_from_slice(b"\r\n--X-BOUNDARY--\r\n");
    body
}
