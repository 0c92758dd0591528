// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-service bindings registered into each fresh `rhai::Engine`:
//! `hosts` (the registry facade) and `ctl` (service control). Both
//! underlying traits are `async_trait`; a script calls them as plain
//! synchronous methods, so each call bridges out via
//! `tokio::task::block_in_place` + `Handle::block_on` onto the runtime
//! the enclosing `run_and_destroy` future is already driven by.

use std::sync::Arc;

use rhai::{Dynamic, Engine};

use flexbios_adapters::{HostsClient, SystemctlAction, SystemctlAdapter};
use flexbios_core::Host;

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(fut))
}

fn host_to_dynamic(host: &Host) -> Dynamic {
    let mut map = rhai::Map::new();
    map.insert("uuid".into(), host.uuid.clone().into());
    map.insert("name".into(), host.name.clone().into());
    map.insert("ip".into(), host.ip.clone().into());
    map.insert("active".into(), host.is_active().into());
    Dynamic::from_map(map)
}

#[derive(Clone)]
struct HostsHandle(Arc<dyn HostsClient>);

impl HostsHandle {
    fn get_host(&mut self, uuid: &str) -> Dynamic {
        match block_on(self.0.get_host(uuid)) {
            Ok(Some(host)) => host_to_dynamic(&host),
            Ok(None) => Dynamic::UNIT,
            Err(err) => {
                tracing::warn!(%err, "hosts.get_host failed");
                Dynamic::UNIT
            }
        }
    }

    fn create_host(&mut self, uuid: &str, name: &str, ip: &str) -> Dynamic {
        match block_on(self.0.create_host(Host::new(uuid, name, ip))) {
            Ok(host) => host_to_dynamic(&host),
            Err(err) => {
                tracing::warn!(%err, "hosts.create_host failed");
                Dynamic::UNIT
            }
        }
    }

    fn list_hosts(&mut self) -> rhai::Array {
        match block_on(self.0.list_hosts()) {
            Ok(hosts) => hosts.iter().map(host_to_dynamic).collect(),
            Err(err) => {
                tracing::warn!(%err, "hosts.list_hosts failed");
                rhai::Array::new()
            }
        }
    }
}

#[derive(Clone)]
struct CtlHandle(Arc<dyn SystemctlAdapter>);

impl CtlHandle {
    fn status(&mut self, unit: &str) -> Dynamic {
        match block_on(self.0.status(unit)) {
            Ok(status) => {
                let mut map = rhai::Map::new();
                map.insert("active".into(), status.active.into());
                map.insert("enabled".into(), status.enabled.into());
                map.insert("failed".into(), status.failed.into());
                map.insert("pid".into(), status.pid.map(|p| Dynamic::from(p as i64)).unwrap_or(Dynamic::UNIT));
                Dynamic::from_map(map)
            }
            Err(err) => {
                tracing::warn!(%err, "ctl.status failed");
                Dynamic::UNIT
            }
        }
    }

    fn is_enabled(&mut self, unit: &str) -> bool {
        block_on(self.0.is_enabled(unit)).unwrap_or(false)
    }

    fn show(&mut self, unit: &str, property: &str) -> String {
        block_on(self.0.show(unit, property)).unwrap_or_default()
    }

    fn do_action(&mut self, unit: &str, action: &str) -> bool {
        let Ok(action) = SystemctlAction::try_from(action) else {
            return false;
        };
        block_on(self.0.do_action(unit, action)).is_ok()
    }
}

/// Registers `hosts` and `ctl` as callable-method globals on `engine` and
/// `scope`.
pub fn register(
    engine: &mut Engine,
    scope: &mut rhai::Scope,
    hosts: Arc<dyn HostsClient>,
    ctl: Arc<dyn SystemctlAdapter>,
) {
    engine.register_type_with_name::<HostsHandle>("Hosts");
    engine.register_fn("get_host", HostsHandle::get_host);
    engine.register_fn("create_host", HostsHandle::create_host);
    engine.register_fn("list_hosts", HostsHandle::list_hosts);

    engine.register_type_with_name::<CtlHandle>("Ctl");
    engine.register_fn("status", CtlHandle::status);
    engine.register_fn("is_enabled", CtlHandle::is_enabled);
    engine.register_fn("show", CtlHandle::show);
    engine.register_fn("do_action", CtlHandle::do_action);

    scope.push("hosts", HostsHandle(hosts));
    scope.push("ctl", CtlHandle(ctl));
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod tests;
