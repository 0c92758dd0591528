// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use flexbios_core::Host;

use super::FakeHostsClient;
use super::HostsClient;

#[tokio::test]
async fn seeded_host_is_returned_by_uuid() {
    let client = FakeHostsClient::new();
    client.seed(Host::new("node-7", "edge-7", "10.0.0.7"));

    let found = client.get_host("node-7").await.unwrap();
    assert_eq!(found.map(|h| h.name), Some("edge-7".to_string()));
}

#[tokio::test]
async fn unknown_uuid_returns_none() {
    let client = FakeHostsClient::new();
    assert!(client.get_host("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn created_host_appears_in_list() {
    let client = FakeHostsClient::new();
    client.create_host(Host::new("node-1", "edge-1", "10.0.0.1")).await.unwrap();
    let hosts = client.list_hosts().await.unwrap();
    assert_eq!(hosts.len(), 1);
}
