// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `RuleEngine`: the presence-only rule registry and the per-invocation
//! `rhai` runtime construction, grounded on `utils/rql/rql.go`'s
//! `RuleEngine`/`Rule`/`RunAndDestroy`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rhai::{Dynamic, Engine, Scope};

use flexbios_adapters::{HostsClient, SystemctlAdapter};

use crate::bindings;
use crate::error::EngineError;
use crate::system_info::SystemInfo;

fn render_log_arg(value: &Dynamic) -> String {
    if let Some(s) = value.clone().try_cast::<rhai::ImmutableString>() {
        s.to_string()
    } else {
        value.to_string()
    }
}

/// Up to four arguments; covers every call site in the original's rule
/// scripts, which never logged more than a handful of values at once.
fn register_log(engine: &mut Engine) {
    engine.register_fn("log", |a: Dynamic| {
        tracing::info!(target: "rql", "{}", render_log_arg(&a));
    });
    engine.register_fn("log", |a: Dynamic, b: Dynamic| {
        tracing::info!(target: "rql", "{} {}", render_log_arg(&a), render_log_arg(&b));
    });
    engine.register_fn("log", |a: Dynamic, b: Dynamic, c: Dynamic| {
        tracing::info!(target: "rql", "{} {} {}", render_log_arg(&a), render_log_arg(&b), render_log_arg(&c));
    });
    engine.register_fn("log", |a: Dynamic, b: Dynamic, c: Dynamic, d: Dynamic| {
        tracing::info!(
            target: "rql",
            "{} {} {} {}",
            render_log_arg(&a),
            render_log_arg(&b),
            render_log_arg(&c),
            render_log_arg(&d)
        );
    });
}

fn register_storage(engine: &mut Engine, storage: Arc<Mutex<HashMap<String, Dynamic>>>) {
    let init_storage = storage.clone();
    engine.register_fn("init", move |key: &str, value: Dynamic| {
        init_storage.lock().entry(key.to_string()).or_insert(value);
    });

    let set_storage = storage.clone();
    engine.register_fn("set", move |key: &str, value: Dynamic| {
        set_storage.lock().insert(key.to_string(), value);
    });

    let get_storage = storage;
    engine.register_fn("get", move |key: &str| -> Dynamic {
        get_storage.lock().get(key).cloned().unwrap_or(Dynamic::UNIT)
    });
}

fn props_to_dynamic(props: &serde_json::Map<String, serde_json::Value>) -> rhai::Map {
    let mut map = rhai::Map::new();
    for (key, value) in props {
        let dynamic = rhai::serde::to_dynamic(value).unwrap_or(Dynamic::UNIT);
        map.insert(key.as_str().into(), dynamic);
    }
    map
}

/// Presence-only rule registry: holds nothing but each running rule's
/// name, guarding against two concurrently-live rules sharing it. The
/// `rhai::Engine` and its scope are built fresh per call and dropped at
/// the end of it — there is no persistent interpreter.
pub struct RuleEngine {
    running: Arc<Mutex<std::collections::HashSet<String>>>,
    hosts: Arc<dyn HostsClient>,
    ctl: Arc<dyn SystemctlAdapter>,
}

impl RuleEngine {
    pub fn new(hosts: Arc<dyn HostsClient>, ctl: Arc<dyn SystemctlAdapter>) -> Self {
        Self { running: Arc::new(Mutex::new(std::collections::HashSet::new())), hosts, ctl }
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.running.lock().contains(name)
    }

    /// Registers `name`, runs `script` to completion, then unregisters it
    /// regardless of outcome.
    #[tracing::instrument(skip(self, script, properties), fields(rule = %name))]
    pub async fn run_and_destroy(
        &self,
        name: &str,
        script: &str,
        properties: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Dynamic, EngineError> {
        {
            let mut running = self.running.lock();
            if !running.insert(name.to_string()) {
                return Err(EngineError::AlreadyExists(name.to_string()));
            }
        }

        struct Guard<'a> {
            running: &'a Mutex<std::collections::HashSet<String>>,
            name: &'a str,
        }
        impl Drop for Guard<'_> {
            fn drop(&mut self) {
                self.running.lock().remove(self.name);
            }
        }
        let _guard = Guard { running: &self.running, name };

        let script = script.to_string();
        let properties_map = props_to_dynamic(&properties);
        let hosts = self.hosts.clone();
        let ctl = self.ctl.clone();

        let result = tokio::task::block_in_place(move || {
            let mut engine = Engine::new();
            let storage = Arc::new(Mutex::new(HashMap::new()));
            register_log(&mut engine);
            register_storage(&mut engine, storage);

            let mut scope = Scope::new();
            scope.push("props", properties_map);

            let system = SystemInfo::read();
            engine.register_type_with_name::<SystemInfo>("System");
            engine.register_get("hostname", SystemInfo::hostname);
            engine.register_get("os", SystemInfo::os);
            engine.register_get("uptime_seconds", SystemInfo::uptime_seconds);
            scope.push("system", system);

            bindings::register(&mut engine, &mut scope, hosts, ctl);

            engine.eval_with_scope::<Dynamic>(&mut scope, &script)
        });

        result.map_err(EngineError::from)
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
