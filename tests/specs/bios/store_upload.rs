//! `POST /api/upload/{uuid}` drives a real `system.store.add.object`
//! request against a live `BiosSupervisor`, landing the uploaded bytes in
//! the object store under the headers' `Store-Name`/`Object-Name` (spec.md
//! §8 end-to-end scenario 4).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use flexbios_daemon::http;

use crate::prelude::boot_node;

fn multipart_body(file_contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(b"--X-BOUNDARY\r\n");
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=\"a.bin\"\r\n");
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(file_contents);
    body.extend_from_slice(b"\r\n--X-BOUNDARY--\r\n");
    body
}

#[tokio::test]
async fn upload_lands_the_file_in_the_object_store() {
    let tmp = tempfile::tempdir().unwrap();
    let node = boot_node("node-upload", tmp.path()).await;

    let app = http::router(node.bus.clone(), std::time::Duration::from_secs(5));

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload/node-upload")
        .header("content-type", "multipart/form-data; boundary=X-BOUNDARY")
        .header("store-name", "bios")
        .header("object-name", "a.bin")
        .body(Body::from(multipart_body(b"b0")))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = node.sup.object_store.get_bytes("bios", "a.bin").await.unwrap();
    assert_eq!(bytes, b"b0");
}
