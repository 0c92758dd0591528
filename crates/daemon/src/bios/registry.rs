// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `(resource, op) -> handler` dispatch table, built once at startup.
//!
//! Replaces the original `bios.go`/`nats.go`'s giant `if/else` chain on the
//! subject tail, per design note §9. A miss falls back to
//! [`crate::error::BiosError::UnknownAction`] (wire code 902).

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use flexbios_wire::Envelope;

use super::handlers;
use super::BiosSupervisor;
use crate::error::BiosError;

type BoxFuture<'a> = Pin<Box<dyn Future<Output = Result<Envelope, BiosError>> + Send + 'a>>;
pub type DispatchFn = Arc<dyn Fn(Arc<BiosSupervisor>, Value) -> BoxFuture<'static> + Send + Sync>;

/// Builds the full dispatch table for every subject family spec.md §4.8
/// lists (except `{uuid}.proxy.>`, owned by [`crate::forwarder::Forwarder`]
/// rather than BIOS).
pub fn build() -> HashMap<(&'static str, &'static str), DispatchFn> {
    let mut map: HashMap<(&'static str, &'static str), DispatchFn> = HashMap::new();

    macro_rules! register {
        ($resource:expr, $op:expr, $handler:path) => {
            map.insert(
                ($resource, $op),
                Arc::new(|sup, body| Box::pin($handler(sup, body)) as BoxFuture<'static>),
            );
        };
    }

    register!("system.systemctl", "status", handlers::systemctl::status);
    register!("system.systemctl", "is-enabled", handlers::systemctl::is_enabled);
    register!("system.systemctl", "show", handlers::systemctl::show);
    register!("system.systemctl", "start", handlers::systemctl::start);
    register!("system.systemctl", "stop", handlers::systemctl::stop);
    register!("system.systemctl", "restart", handlers::systemctl::restart);
    register!("system.systemctl", "enable", handlers::systemctl::enable);
    register!("system.systemctl", "disable", handlers::systemctl::disable);

    register!("apps.manager", "installed", handlers::apps::installed);
    register!("apps.manager", "library", handlers::apps::library);
    register!("apps.manager", "backups", handlers::apps::backups);
    register!("apps.manager", "install", handlers::apps::install);
    register!("apps.manager", "uninstall", handlers::apps::uninstall);
    register!("apps.manager", "restore", handlers::apps::restore);
    register!("apps.manager", "systemctl", handlers::apps::systemctl);

    register!("git.manager", "list", handlers::git::list_assets);
    register!("git.manager", "download", handlers::git::download_asset);

    register!("system.store", "get.stores", handlers::store::get_stores);
    register!("system.store", "get.object", handlers::store::get_object);
    register!("system.store", "add.object", handlers::store::add_object);
    register!("system.store", "delete.object", handlers::store::delete_object);
    register!("system.store", "download.object", handlers::store::download_object);

    register!("system.rule", "run", handlers::rule::run);

    map
}

/// Splits a bios-scoped subject's tail (everything after `{uuid}.{verb}.`)
/// into `(resource, op)` against the set of known resource prefixes. The
/// `system.store` family's ops are themselves dotted (`add.object`), so
/// this can't just take "the last segment" generically — each known
/// resource prefix is tried, longest tail remaining after stripping it.
pub fn split_resource_op(tail: &str) -> Option<(&'static str, String)> {
    const RESOURCES: &[&str] =
        &["system.systemctl", "apps.manager", "git.manager", "system.store", "system.rule"];
    for resource in RESOURCES {
        if let Some(rest) = tail.strip_prefix(resource) {
            let op = rest.trim_start_matches('.');
            return Some((resource, op.to_string()));
        }
    }
    None
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
