// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `github-download <owner> <repo> <tag> <arch> <token>`.

use clap::Args;

use crate::client::{require_success, BiosClient};
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct GithubDownloadArgs {
    pub owner: String,
    pub repo: String,
    pub tag: String,
    /// Release asset name (spec names this positional `arch`, since every
    /// release this talks to names its assets by target architecture).
    pub arch: String,
    /// Omit to fall back to the daemon's configured `git_token`.
    pub token: Option<String>,
}

pub async fn download(client: &BiosClient, args: GithubDownloadArgs, format: OutputFormat) -> Result<(), ExitError> {
    let envelope = client
        .github_download(&args.owner, &args.repo, &args.tag, &args.arch, args.token.as_deref())
        .await
        .map_err(|e| ExitError::new(1, e.to_string()))?;
    let envelope = require_success(envelope).map_err(|e| ExitError::new(2, e.to_string()))?;
    output::print_envelope(format, &envelope);
    Ok(())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
