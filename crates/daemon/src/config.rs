// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `BiosConfig`: the YAML configuration file every BIOS instance reads at
//! startup (spec.md §6).
//!
//! **Open Question resolved** (SPEC_FULL.md §9): the teacher stack has no
//! YAML-for-config precedent, using `toml` throughout. BIOS config is read
//! as YAML anyway because spec.md §6 is explicit and external tooling
//! already expects a YAML file; `serde_yaml` is already a workspace
//! dependency for `appmgr`'s `config.yaml`, so this doesn't introduce a
//! second parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_nats_url() -> String {
    "nats://127.0.0.1:4222".to_string()
}

fn default_proxy_port() -> u16 {
    4223
}

fn default_root_path() -> String {
    "/ros/apps".to_string()
}

fn default_system_path() -> String {
    "/etc/systemd/system".to_string()
}

fn default_hosts_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_http_addr() -> String {
    "0.0.0.0:8090".to_string()
}

/// BIOS daemon configuration, loaded from a YAML file discovered relative
/// to the binary or via `--config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiosConfig {
    /// The host's globalUUID.
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_nats_url")]
    pub nats_url: String,
    #[serde(default = "default_proxy_port")]
    pub proxy_port: u16,
    #[serde(default = "default_root_path")]
    pub root_path: String,
    #[serde(default)]
    pub apps_path: String,
    #[serde(default = "default_system_path")]
    pub system_path: String,
    #[serde(default)]
    pub git_token: Option<String>,
    #[serde(default)]
    pub git_download_path: Option<String>,
    /// Base URL of the out-of-scope host-registry service the
    /// ScriptEngine's `hosts` binding and the git-manager handlers talk to.
    #[serde(default = "default_hosts_url")]
    pub hosts_url: String,
    /// **Open Question resolved** (SPEC_FULL.md §10): spec.md §4.9 doesn't
    /// name a listen address for the HTTP proxy, only the two routes it
    /// serves. Defaults to `0.0.0.0:8090`, configurable like every other
    /// network endpoint here.
    #[serde(default = "default_http_addr")]
    pub http_addr: String,
    /// **Reserved** (Open Question resolved): parsed but not used to filter
    /// subscriptions — BIOS always subscribes every subject family,
    /// matching the original's actual behavior rather than its apparent
    /// intent (spec.md §9).
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl BiosConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BiosConfig = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    /// `root_path` joined with `apps_path`, matching spec.md §6's
    /// "`apps_path` (appended to `root_path`)".
    pub fn apps_root(&self) -> std::path::PathBuf {
        if self.apps_path.is_empty() {
            std::path::PathBuf::from(&self.root_path)
        } else {
            std::path::PathBuf::from(&self.root_path).join(&self.apps_path)
        }
    }

    /// The target bus URL the Forwarder connects to, derived from
    /// `nats_url`'s host and `proxy_port`.
    pub fn proxy_target_url(&self) -> String {
        let host = self
            .nats_url
            .rsplit_once(':')
            .map(|(host, _port)| host)
            .unwrap_or(&self.nats_url);
        format!("{host}:{}", self.proxy_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: std::path::PathBuf, source: std::io::Error },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
