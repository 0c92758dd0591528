// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `apps-installed`, `apps-library`, `app-install`, `app-uninstall`,
//! `app-systemctl`.

use clap::Args;

use crate::client::{require_success, BiosClient};
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct AppInstallArgs {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Args)]
pub struct AppUninstallArgs {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Args)]
pub struct AppSystemctlArgs {
    /// Installed app's service name.
    pub name: String,
    pub version: String,
    /// start | stop | restart | enable | disable
    pub action: String,
}

async fn finish(result: Result<flexbios_wire::Envelope, crate::client::ClientError>, format: OutputFormat) -> Result<(), ExitError> {
    let envelope = result.map_err(|e| ExitError::new(1, e.to_string()))?;
    let envelope = require_success(envelope).map_err(|e| ExitError::new(2, e.to_string()))?;
    output::print_envelope(format, &envelope);
    Ok(())
}

pub async fn installed(client: &BiosClient, format: OutputFormat) -> Result<(), ExitError> {
    finish(client.apps_installed().await, format).await
}

pub async fn library(client: &BiosClient, format: OutputFormat) -> Result<(), ExitError> {
    finish(client.apps_library().await, format).await
}

pub async fn install(client: &BiosClient, args: AppInstallArgs, format: OutputFormat) -> Result<(), ExitError> {
    finish(client.app_install(&args.name, &args.version).await, format).await
}

pub async fn uninstall(client: &BiosClient, args: AppUninstallArgs, format: OutputFormat) -> Result<(), ExitError> {
    finish(client.app_uninstall(&args.name, &args.version).await, format).await
}

pub async fn systemctl(client: &BiosClient, args: AppSystemctlArgs, format: OutputFormat) -> Result<(), ExitError> {
    finish(client.app_systemctl(&args.name, &args.version, &args.action).await, format).await
}

#[cfg(test)]
#[path = "apps_tests.rs"]
mod tests;
