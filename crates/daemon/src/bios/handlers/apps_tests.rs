// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde_json::json;
use zip::write::FileOptions;
use zip::ZipWriter;

use super::*;
use crate::bios::test_supervisor;

fn seed_library_app(root: &std::path::Path, name: &str, version: &str) {
    let path = root.join("library").join(format!("{name}-{version}.zip"));
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();
    let entry_root = format!("{name}-{version}");
    zip.start_file(format!("{entry_root}/{name}"), options).unwrap();
    zip.write_all(b"#!/bin/sh\necho hi\n").unwrap();
    zip.finish().unwrap();
}

#[tokio::test]
async fn installed_library_and_backups_start_empty() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());

    for handler in [installed, library, backups] {
        let envelope = handler(harness.sup.clone(), json!(null)).await.unwrap();
        assert_eq!(envelope.payload, json!([]));
    }
}

#[tokio::test]
async fn install_requires_a_version() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());

    let err = install(harness.sup, json!({"name": "demo"})).await.unwrap_err();
    assert!(matches!(err, BiosError::InvalidParams(_)));
}

#[tokio::test]
async fn install_then_uninstall_round_trips_through_backups() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());
    seed_library_app(dir.path(), "demo", "v1.0.0");

    let envelope = install(harness.sup.clone(), json!({"name": "demo", "version": "v1.0.0"})).await.unwrap();
    assert!(envelope.is_success());

    let installed_envelope = installed(harness.sup.clone(), json!(null)).await.unwrap();
    assert_eq!(installed_envelope.payload.as_array().unwrap().len(), 1);

    let uninstall_envelope =
        uninstall(harness.sup.clone(), json!({"name": "demo", "version": "v1.0.0"})).await.unwrap();
    assert!(uninstall_envelope.is_success());

    let backups_envelope = backups(harness.sup, json!(null)).await.unwrap();
    assert_eq!(backups_envelope.payload.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn apps_systemctl_requires_an_action() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());

    let err = systemctl(harness.sup, json!({"name": "demo"})).await.unwrap_err();
    assert!(matches!(err, BiosError::InvalidParams(_)));
}

#[tokio::test]
async fn apps_systemctl_runs_the_named_action() {
    let dir = tempfile::tempdir().unwrap();
    let harness = test_supervisor(dir.path().to_path_buf());

    let envelope =
        systemctl(harness.sup, json!({"name": "demo", "action": "restart"})).await.unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.payload, json!("demo.service"));
}
