// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `system`: the read-only `hostname`/`os`/`uptime` binding, grounded on
//! `utils/system`'s `NewSystem()` — a couple of read-only fields, not a
//! full metrics package.

/// Snapshot of host identity bound into RQL scripts as `system`.
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub uptime_seconds: u64,
}

impl SystemInfo {
    pub fn read() -> Self {
        Self { hostname: read_hostname(), os: std::env::consts::OS.to_string(), uptime_seconds: read_uptime() }
    }

    pub fn hostname(&mut self) -> String {
        self.hostname.clone()
    }

    pub fn os(&mut self) -> String {
        self.os.clone()
    }

    pub fn uptime_seconds(&mut self) -> i64 {
        self.uptime_seconds as i64
    }
}

fn read_hostname() -> String {
    if let Ok(name) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

fn read_uptime() -> u64 {
    std::fs::read_to_string("/proc/uptime")
        .ok()
        .and_then(|contents| contents.split_whitespace().next().map(str::to_string))
        .and_then(|secs| secs.parse::<f64>().ok())
        .map(|secs| secs as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "system_info_tests.rs"]
mod tests;
