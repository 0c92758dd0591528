// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `flexbiosd`: wires a [`BiosSupervisor`] to a real NATS bus, starts the
//! proxy forwarder and the HTTP gateway, and runs until interrupted.
//!
//! No teacher precedent exists for a binary entrypoint (the original
//! daemon crate is lib-only); the tracing-subscriber init pattern here
//! follows the same `fmt()...init()` shape other pack services use.

use std::sync::Arc;

use flexbios_adapters::{HttpHostsClient, RestGitDownloader, ShellSystemctlAdapter};
use flexbios_daemon::bus::{MessageBus, NatsBus};
use flexbios_daemon::{http, BiosConfig, BiosSupervisor, Forwarder, ForwarderConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let explicit_config = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config_path = flexbios_daemon::env::config_path(explicit_config.as_deref());
    let config = BiosConfig::load(&config_path)?;

    tracing::info!(id = %config.id, config = %config_path.display(), "starting flexbiosd");

    let bus: Arc<dyn MessageBus> = Arc::new(NatsBus::connect(&config.nats_url).await?);
    let systemctl = Arc::new(ShellSystemctlAdapter::new(flexbios_daemon::env::subprocess_timeout()));
    let git_downloader = Arc::new(RestGitDownloader::new());
    let hosts = Arc::new(HttpHostsClient::new(config.hosts_url.clone()));

    let http_addr = config.http_addr.clone();
    let proxy_target = config.proxy_target_url();
    let global_uuid = config.id.clone();

    let supervisor = BiosSupervisor::new(config, bus.clone(), systemctl, git_downloader, hosts)?;
    supervisor.subscribe_all().await?;

    let target_bus: Arc<dyn MessageBus> = Arc::new(NatsBus::connect(&proxy_target).await?);
    let forwarder = Arc::new(Forwarder::new(bus.clone(), target_bus, ForwarderConfig::new(global_uuid)));
    forwarder.run().await?;

    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!(addr = %http_addr, "HTTP gateway listening");
    let app = http::router(bus, flexbios_daemon::env::bus_timeout());

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(%err, "HTTP gateway exited");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
    }

    Ok(())
}
