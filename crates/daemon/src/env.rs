// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment/default-value access for the daemon crate,
//! grounded on the teacher's own `env.rs` (`ipc_timeout`/`state_dir`
//! style), generalized to the bus timeouts and config-path resolution
//! this system needs instead of a Unix-socket IPC path.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default bus request/request-all timeout (spec.md §4.4's Forwarder
/// default, reused as the system-wide default per spec §5).
pub fn bus_timeout() -> Duration {
    std::env::var("FLEXBIOS_BUS_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(5))
}

/// Default `systemctl` subprocess timeout (spec.md §5).
pub fn subprocess_timeout() -> Duration {
    std::env::var("FLEXBIOS_SYSTEMCTL_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(2))
}

/// Resolve the config file path: `--config` argument, `FLEXBIOS_CONFIG`,
/// or `config.yaml` next to the running binary.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("FLEXBIOS_CONFIG") {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("config.yaml")))
        .unwrap_or_else(|| PathBuf::from("config.yaml"))
}
