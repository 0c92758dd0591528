//! Install an app from the library over the bus, then uninstall it and
//! check the backup is byte-identical to what was installed.

use crate::prelude::{boot_node, client_for, write_app_zip};

#[tokio::test]
async fn install_then_uninstall_preserves_a_byte_identical_backup() {
    let tmp = tempfile::tempdir().unwrap();
    let node = boot_node("node-lifecycle", tmp.path()).await;
    let client = client_for(&node, "node-lifecycle");

    let zip_path = node.root.join("library").join("widget-v1.0.0.zip");
    write_app_zip(&zip_path, "widget", "v1.0.0");

    let install_envelope = client.app_install("widget", "v1.0.0").await.unwrap();
    assert!(install_envelope.is_success());

    let installed = client.apps_installed().await.unwrap();
    assert!(installed.payload.as_array().unwrap().iter().any(|a| a["name"] == "widget"));

    let install_dir = node.root.join("installed").join("widget").join("v1.0.0");
    let installed_bytes = std::fs::read(install_dir.join("config.yaml")).unwrap();

    let uninstall_envelope = client.app_uninstall("widget", "v1.0.0").await.unwrap();
    assert!(uninstall_envelope.is_success());
    assert!(!install_dir.exists());

    let backup_bytes =
        std::fs::read(node.root.join("backups").join("widget").join("v1.0.0").join("config.yaml")).unwrap();
    assert_eq!(installed_bytes, backup_bytes);

    let start_calls = node
        .systemctl
        .calls()
        .into_iter()
        .filter(|c| matches!(c, flexbios_adapters::systemctl::RecordedCall::Do(u, a) if u == "widget.service" && a == "start"))
        .count();
    assert_eq!(start_calls, 1);
}

#[tokio::test]
async fn app_systemctl_drives_an_installed_units_lifecycle() {
    let tmp = tempfile::tempdir().unwrap();
    let node = boot_node("node-lifecycle-2", tmp.path()).await;
    let client = client_for(&node, "node-lifecycle-2");

    let zip_path = node.root.join("library").join("widget-v1.0.0.zip");
    write_app_zip(&zip_path, "widget", "v1.0.0");
    client.app_install("widget", "v1.0.0").await.unwrap();

    let stop = client.app_systemctl("widget", "v1.0.0", "stop").await.unwrap();
    assert!(stop.is_success());
    assert!(node
        .systemctl
        .calls()
        .into_iter()
        .any(|c| matches!(c, flexbios_adapters::systemctl::RecordedCall::Do(u, a) if u == "widget.service" && a == "stop")));
}
