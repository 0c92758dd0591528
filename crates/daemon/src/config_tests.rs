// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn load_applies_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "id: node-7\ndescription: edge node\n").unwrap();

    let config = BiosConfig::load(&path).unwrap();
    assert_eq!(config.id, "node-7");
    assert_eq!(config.nats_url, "nats://127.0.0.1:4222");
    assert_eq!(config.proxy_port, 4223);
    assert_eq!(config.root_path, "/ros/apps");
    assert_eq!(config.system_path, "/etc/systemd/system");
    assert!(config.services.is_empty());
    assert!(!config.store.enabled);
}

#[test]
fn load_missing_file_errors() {
    let err = BiosConfig::load(Path::new("/nonexistent/config.yaml"));
    assert!(matches!(err, Err(ConfigError::Read { .. })));
}

#[test]
fn apps_root_joins_root_and_apps_path() {
    let config = BiosConfig {
        id: "n".to_string(),
        description: String::new(),
        nats_url: default_nats_url(),
        proxy_port: default_proxy_port(),
        root_path: "/ros/apps".to_string(),
        apps_path: "v2".to_string(),
        system_path: default_system_path(),
        git_token: None,
        git_download_path: None,
        hosts_url: default_hosts_url(),
        http_addr: default_http_addr(),
        services: Vec::new(),
        store: StoreConfig::default(),
    };
    assert_eq!(config.apps_root(), std::path::PathBuf::from("/ros/apps/v2"));
}

#[test]
fn proxy_target_url_swaps_port_on_nats_url() {
    let config = BiosConfig {
        id: "n".to_string(),
        description: String::new(),
        nats_url: "nats://127.0.0.1:4222".to_string(),
        proxy_port: 4223,
        root_path: default_root_path(),
        apps_path: String::new(),
        system_path: default_system_path(),
        git_token: None,
        git_download_path: None,
        hosts_url: default_hosts_url(),
        http_addr: default_http_addr(),
        services: Vec::new(),
        store: StoreConfig::default(),
    };
    assert_eq!(config.proxy_target_url(), "nats://127.0.0.1:4223");
}
