// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! App descriptor, archive config, and systemd service-unit synthesis.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An app as it appears on disk or in a response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), path: None }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// The systemd unit name for this app, ignoring `FileNameWithVersion`.
    pub fn unit_name(&self) -> String {
        format!("{}.service", self.name)
    }
}

/// `service_file` stanza of an archive's optional `config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFileEnv {
    #[serde(default)]
    pub env: String,
}

/// Optional `config.yaml` carried inside an app archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub service_file: ServiceFileEnv,
}

/// Builder for a synthesized systemd service unit.
///
/// Mirrors the fixed-section layout the original Go wrote by hand
/// (`[Unit]`/`[Service]`/`[Install]`) rather than pulling in a unit-file
/// crate for a format this small.
#[derive(Debug, Clone)]
pub struct ServiceUnitSpec {
    pub name: String,
    pub description: Option<String>,
    pub exec_start: String,
    pub working_dir: String,
    pub environment: Option<String>,
    pub user: String,
    pub restart_sec: u32,
}

impl ServiceUnitSpec {
    pub fn new(name: impl Into<String>, working_dir: impl Into<String>) -> Self {
        let name = name.into();
        let working_dir = working_dir.into();
        let exec_start = format!("{working_dir}/{name}");
        Self {
            name,
            description: None,
            exec_start,
            working_dir,
            environment: None,
            user: "root".to_string(),
            restart_sec: 10,
        }
    }

    pub fn with_exec_start(mut self, exec_start: impl Into<String>) -> Self {
        self.exec_start = exec_start.into();
        self
    }

    pub fn with_environment(mut self, env: Option<String>) -> Self {
        self.environment = env;
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Apply the `<root_dir>`/`<data_dir>`/`<data_dir_name>` templating to
    /// `exec_start`, resolving against `root_dir` (the `installed/` root).
    pub fn template_exec_start(mut self, root_dir: &str) -> Self {
        let data_dir = format!("{}/{}/data", root_dir, self.name);
        self.exec_start = self
            .exec_start
            .replace("<root_dir>", root_dir)
            .replace("<data_dir>", &data_dir)
            .replace("<data_dir_name>", &self.name);
        self
    }

    /// Render the unit-file text.
    pub fn render(&self) -> String {
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| format!("Service for {}", self.name));
        let mut service = String::new();
        service.push_str("[Unit]\n");
        service.push_str(&format!("Description={description}\n"));
        service.push_str("After=network.target\n\n");
        service.push_str("[Service]\n");
        service.push_str("Type=simple\n");
        service.push_str(&format!("User={}\n", self.user));
        service.push_str(&format!("WorkingDirectory={}\n", self.working_dir));
        if let Some(env) = &self.environment {
            if !env.is_empty() {
                service.push_str(&format!("Environment={env}\n"));
            }
        }
        service.push_str(&format!("ExecStart={}\n", self.exec_start));
        service.push_str("Restart=always\n");
        service.push_str(&format!("RestartSec={}\n", self.restart_sec));
        service.push_str("StandardOutput=syslog\n");
        service.push_str("StandardError=syslog\n");
        service.push_str(&format!("SyslogIdentifier={}\n\n", self.name));
        service.push_str("[Install]\n");
        service.push_str("WantedBy=multi-user.target\n");
        service
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
