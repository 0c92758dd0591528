// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared `BiosClient` + `LocalBus` fixture for command-level tests.

use std::sync::Arc;
use std::time::Duration;

use flexbios_adapters::{FakeGitDownloader, FakeHostsClient, FakeSystemctlAdapter};
use flexbios_daemon::bus::LocalBus;
use flexbios_daemon::config::{BiosConfig, StoreConfig};
use flexbios_daemon::{BiosSupervisor, MessageBus};
use tempfile::TempDir;

use crate::client::BiosClient;

pub(crate) struct TestNode {
    pub _tmp: TempDir,
    pub client: BiosClient,
    pub git: Arc<FakeGitDownloader>,
    pub systemctl: Arc<FakeSystemctlAdapter>,
}

pub(crate) async fn test_node() -> TestNode {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(tmp.path().join("library")).unwrap();
    std::fs::create_dir_all(tmp.path().join("installed")).unwrap();
    std::fs::create_dir_all(tmp.path().join("systemd")).unwrap();

    let config = BiosConfig {
        id: "node-cli-test".to_string(),
        description: "cli test node".to_string(),
        nats_url: "nats://127.0.0.1:4222".to_string(),
        proxy_port: 4223,
        root_path: tmp.path().to_string_lossy().into_owned(),
        apps_path: String::new(),
        system_path: tmp.path().join("systemd").to_string_lossy().into_owned(),
        git_token: None,
        git_download_path: None,
        hosts_url: "http://127.0.0.1:8080".to_string(),
        http_addr: "127.0.0.1:0".to_string(),
        services: Vec::new(),
        store: StoreConfig::default(),
    };

    let bus: Arc<dyn MessageBus> = Arc::new(LocalBus::new());
    let systemctl = Arc::new(FakeSystemctlAdapter::new());
    let git = Arc::new(FakeGitDownloader::new());
    let hosts: Arc<dyn flexbios_adapters::HostsClient> = Arc::new(FakeHostsClient::new());
    let sup = BiosSupervisor::new(config, bus.clone(), systemctl.clone(), git.clone(), hosts).expect("supervisor");
    sup.subscribe_all().await.expect("subscribe_all");

    let client = BiosClient::new(bus, "node-cli-test", Duration::from_secs(1));
    TestNode { _tmp: tmp, client, git, systemctl }
}
