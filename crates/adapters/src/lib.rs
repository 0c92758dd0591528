// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapters for the host-local services ScriptEngine and BIOS bind into
//! the bus: service control, the host registry facade, and the GitHub
//! release downloader.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
pub mod git;
pub mod hosts;
pub mod systemctl;

pub use error::AdapterError;
pub use git::{GitDownloader, ReleaseAsset, RestGitDownloader};
pub use hosts::{HostsClient, HttpHostsClient};
pub use systemctl::{ServiceStatus, ShellSystemctlAdapter, SystemctlAction, SystemctlAdapter};

#[cfg(any(test, feature = "test-support"))]
pub use git::FakeGitDownloader;
#[cfg(any(test, feature = "test-support"))]
pub use hosts::FakeHostsClient;
#[cfg(any(test, feature = "test-support"))]
pub use systemctl::{FakeSystemctlAdapter, RecordedCall};
