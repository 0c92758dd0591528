// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed wrapper over `systemctl`: status, enablement, property reads, and
//! the five write actions a unit can be told to do.
//!
//! Grounded on `utils/systemctl/base.go`'s `CTL` (`SystemdStatus`/
//! `SystemdCommand`/`SystemdShow`/`SystemdIsEnabled`) and
//! `utils/execute/commands/ctl.go`'s service-file helpers, reimplemented
//! over [`flexbios_exec::run_command`] instead of shelling out through a
//! bespoke command wrapper.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;

use crate::error::AdapterError;

/// The five write actions a unit accepts. Anything else is
/// [`AdapterError::InvalidAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemctlAction {
    Start,
    Stop,
    Restart,
    Enable,
    Disable,
}

impl SystemctlAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemctlAction::Start => "start",
            SystemctlAction::Stop => "stop",
            SystemctlAction::Restart => "restart",
            SystemctlAction::Enable => "enable",
            SystemctlAction::Disable => "disable",
        }
    }
}

impl TryFrom<&str> for SystemctlAction {
    type Error = AdapterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "start" => Ok(SystemctlAction::Start),
            "stop" => Ok(SystemctlAction::Stop),
            "restart" => Ok(SystemctlAction::Restart),
            "enable" => Ok(SystemctlAction::Enable),
            "disable" => Ok(SystemctlAction::Disable),
            other => Err(AdapterError::InvalidAction(other.to_string())),
        }
    }
}

/// Synthesized from a textual `systemctl status` dump plus a couple of
/// follow-up calls: `Active:`/`Main PID:`/`Memory:`/`CPU:` regex
/// matches, augmented with `show(unit, "NRestarts")` and `is_enabled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub active: bool,
    pub enabled: bool,
    pub failed: bool,
    pub running_since: Option<String>,
    pub uptime: Option<String>,
    pub pid: Option<u32>,
    pub memory: Option<String>,
    pub cpu: Option<String>,
    pub restart_count: Option<u32>,
}

#[async_trait]
pub trait SystemctlAdapter: Send + Sync {
    async fn status(&self, unit: &str) -> Result<ServiceStatus, AdapterError>;
    async fn is_enabled(&self, unit: &str) -> Result<bool, AdapterError>;
    async fn show(&self, unit: &str, property: &str) -> Result<String, AdapterError>;
    async fn do_action(&self, unit: &str, action: SystemctlAction) -> Result<(), AdapterError>;
}

/// Shells out to the real `systemctl` binary under a subprocess timeout.
pub struct ShellSystemctlAdapter {
    subprocess_timeout: Duration,
}

impl ShellSystemctlAdapter {
    pub fn new(subprocess_timeout: Duration) -> Self {
        Self { subprocess_timeout }
    }
}

impl Default for ShellSystemctlAdapter {
    /// Default 2s subprocess timeout.
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

fn capture(re: &str, haystack: &str) -> Option<String> {
    Regex::new(re).ok()?.captures(haystack).and_then(|c| c.get(1)).map(|m| m.as_str().trim().to_string())
}

fn parse_status_dump(unit: &str, dump: &str) -> ServiceStatus {
    let active = capture(r"Active:\s*(\w+)", dump).as_deref() == Some("active");
    let failed = capture(r"Active:\s*(\w+)", dump).as_deref() == Some("failed");
    let running_since = capture(r"Active:.*since\s+([^;]+);", dump);
    let uptime = capture(r";\s*([^;]+?)\s+ago", dump);
    let pid = capture(r"Main PID:\s*(\d+)", dump).and_then(|s| s.parse().ok());
    let memory = capture(r"Memory:\s*([^\n]+)", dump);
    let cpu = capture(r"CPU:\s*([^\n]+)", dump);
    let _ = unit;
    ServiceStatus { active, enabled: false, failed, running_since, uptime, pid, memory, cpu, restart_count: None }
}

#[async_trait]
impl SystemctlAdapter for ShellSystemctlAdapter {
    async fn status(&self, unit: &str) -> Result<ServiceStatus, AdapterError> {
        let output = flexbios_exec::run_command(
            "systemctl",
            &["status", unit, "--no-pager", "--lines=0"],
            self.subprocess_timeout,
        )
        .await?;
        let mut status = parse_status_dump(unit, &output.stdout);
        status.enabled = self.is_enabled(unit).await.unwrap_or(false);
        status.restart_count = self.show(unit, "NRestarts").await.ok().and_then(|s| s.parse().ok());
        Ok(status)
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool, AdapterError> {
        let output =
            flexbios_exec::run_command("systemctl", &["is-enabled", unit], self.subprocess_timeout).await?;
        Ok(output.stdout.trim() == "enabled")
    }

    async fn show(&self, unit: &str, property: &str) -> Result<String, AdapterError> {
        let property_arg = format!("--property={property}");
        let output =
            flexbios_exec::run_command("systemctl", &["show", unit, &property_arg], self.subprocess_timeout)
                .await?;
        Ok(output.stdout.trim().trim_start_matches(&format!("{property}=")).to_string())
    }

    async fn do_action(&self, unit: &str, action: SystemctlAction) -> Result<(), AdapterError> {
        let output =
            flexbios_exec::run_command("systemctl", &[action.as_str(), unit], self.subprocess_timeout).await?;
        if !output.success() {
            return Err(AdapterError::NotFound(format!(
                "systemctl {} {unit} exited {}: {}",
                action.as_str(),
                output.exit_code,
                output.stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSystemctlAdapter, RecordedCall};

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{AdapterError, ServiceStatus, SystemctlAction, SystemctlAdapter};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecordedCall {
        Status(String),
        IsEnabled(String),
        Show(String, String),
        Do(String, String),
    }

    #[derive(Default)]
    struct State {
        calls: Vec<RecordedCall>,
        statuses: std::collections::HashMap<String, ServiceStatus>,
        enabled: std::collections::HashMap<String, bool>,
        show_values: std::collections::HashMap<(String, String), String>,
    }

    /// Records every call and returns programmable fixtures, used by
    /// `appmgr` and `engine` test suites.
    #[derive(Clone, Default)]
    pub struct FakeSystemctlAdapter {
        state: Arc<Mutex<State>>,
    }

    impl FakeSystemctlAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_status(&self, unit: impl Into<String>, status: ServiceStatus) {
            self.state.lock().statuses.insert(unit.into(), status);
        }

        pub fn set_enabled(&self, unit: impl Into<String>, enabled: bool) {
            self.state.lock().enabled.insert(unit.into(), enabled);
        }

        pub fn set_show(&self, unit: impl Into<String>, property: impl Into<String>, value: impl Into<String>) {
            self.state.lock().show_values.insert((unit.into(), property.into()), value.into());
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.state.lock().calls.clone()
        }
    }

    #[async_trait]
    impl SystemctlAdapter for FakeSystemctlAdapter {
        async fn status(&self, unit: &str) -> Result<ServiceStatus, AdapterError> {
            let mut state = self.state.lock();
            state.calls.push(RecordedCall::Status(unit.to_string()));
            Ok(state.statuses.get(unit).cloned().unwrap_or_default())
        }

        async fn is_enabled(&self, unit: &str) -> Result<bool, AdapterError> {
            let mut state = self.state.lock();
            state.calls.push(RecordedCall::IsEnabled(unit.to_string()));
            Ok(*state.enabled.get(unit).unwrap_or(&false))
        }

        async fn show(&self, unit: &str, property: &str) -> Result<String, AdapterError> {
            let mut state = self.state.lock();
            state.calls.push(RecordedCall::Show(unit.to_string(), property.to_string()));
            Ok(state.show_values.get(&(unit.to_string(), property.to_string())).cloned().unwrap_or_default())
        }

        async fn do_action(&self, unit: &str, action: SystemctlAction) -> Result<(), AdapterError> {
            let mut state = self.state.lock();
            state.calls.push(RecordedCall::Do(unit.to_string(), action.as_str().to_string()));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "systemctl_tests.rs"]
mod tests;
