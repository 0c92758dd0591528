// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The HTTP→bus gateway: `POST /api/proxy/*topic` forwards an arbitrary
//! request body onto the bus as a request/reply, and
//! `POST /api/upload/:uuid` turns a multipart file upload into a
//! `system.store.add.object` bus request (spec.md §4.9).

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use base64::Engine;

use flexbios_wire::StoreRequest;

use crate::bus::{BusError, MessageBus};

const TIMEOUT_HEADER: &str = "x-timeout";
const DEBUG_HEADER: &str = "debug";
const STORE_NAME_HEADER: &str = "store-name";
const OBJECT_NAME_HEADER: &str = "object-name";

#[derive(Clone)]
struct HttpState {
    bus: Arc<dyn MessageBus>,
    default_timeout: Duration,
}

/// Builds the gateway router over `bus`, falling back to `default_timeout`
/// for any proxy request that doesn't set `X-Timeout`.
pub fn router(bus: Arc<dyn MessageBus>, default_timeout: Duration) -> Router {
    Router::new()
        .route("/api/proxy/*topic", post(proxy))
        .route("/api/upload/:uuid", post(upload))
        .with_state(HttpState { bus, default_timeout })
}

/// Parses the Go-duration subset spec.md §4.9 documents for `X-Timeout`:
/// a bare integer followed by `s`, `ms`, or `us`. `ms`/`us` are checked
/// before the bare `s` suffix since both end in `s` too.
fn parse_timeout_header(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if let Some(digits) = raw.strip_suffix("ms") {
        return digits.trim().parse::<u64>().ok().map(Duration::from_millis);
    }
    if let Some(digits) = raw.strip_suffix("us") {
        return digits.trim().parse::<u64>().ok().map(Duration::from_micros);
    }
    if let Some(digits) = raw.strip_suffix('s') {
        return digits.trim().parse::<f64>().ok().map(Duration::from_secs_f64);
    }
    None
}

fn bus_error_response(err: BusError) -> Response {
    match err {
        BusError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, err.to_string()).into_response(),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
    }
}

async fn proxy(
    State(state): State<HttpState>,
    Path(topic): Path<String>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Response {
    let subject = topic.replace('/', ".");
    let timeout = headers
        .get(TIMEOUT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_timeout_header)
        .unwrap_or(state.default_timeout);

    if headers.get(DEBUG_HEADER).and_then(|v| v.to_str().ok()) == Some("true") {
        tracing::debug!(%subject, timeout_ms = timeout.as_millis(), "proxying debug request");
    }

    match state.bus.request(&subject, body.to_vec(), timeout).await {
        Ok(msg) => ([(axum::http::header::CONTENT_TYPE, "application/json")], msg.payload).into_response(),
        Err(err) => bus_error_response(err),
    }
}

async fn upload(
    State(state): State<HttpState>,
    Path(uuid): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let Some(store_name) = headers.get(STORE_NAME_HEADER).and_then(|v| v.to_str().ok()) else {
        return (StatusCode::BAD_REQUEST, "missing Store-Name header").into_response();
    };
    let Some(object_name) = headers.get(OBJECT_NAME_HEADER).and_then(|v| v.to_str().ok()) else {
        return (StatusCode::BAD_REQUEST, "missing Object-Name header").into_response();
    };
    let store_name = store_name.to_string();
    let object_name = object_name.to_string();

    let mut file_bytes: Option<Vec<u8>> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let is_file = field.name() == Some("file");
                match field.bytes().await {
                    Ok(bytes) if is_file => file_bytes = Some(bytes.to_vec()),
                    Ok(_) => {}
                    Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
                }
            }
            Ok(None) => break,
            Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        }
    }

    let Some(file_bytes) = file_bytes else {
        return (StatusCode::BAD_REQUEST, "missing file field").into_response();
    };

    let data = base64::engine::general_purpose::STANDARD.encode(file_bytes);
    let request = StoreRequest {
        action: Some("add.object".to_string()),
        store_name,
        object_name: Some(object_name),
        data: Some(data),
    };
    let body = match serde_json::to_vec(&request) {
        Ok(body) => body,
        Err(err) => return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    };

    let subject = format!("{uuid}.post.system.store.add.object");
    match state.bus.request(&subject, body, state.default_timeout).await {
        Ok(msg) => ([(axum::http::header::CONTENT_TYPE, "application/json")], msg.payload).into_response(),
        Err(err) => bus_error_response(err),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
