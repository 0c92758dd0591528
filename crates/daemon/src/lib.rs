// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FlexBIOS daemon library
//!
//! This module exposes the bus transport, the BIOS supervisor, the proxy
//! forwarder, and the HTTP gateway for use by the `flexbiosd` binary.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod bios;
pub mod bus;
pub mod config;
pub mod env;
pub mod error;
pub mod forwarder;
pub mod http;

pub use bios::BiosSupervisor;
pub use bus::{BusError, BusMessage, LocalBus, MessageBus, NatsBus};
pub use config::{BiosConfig, ConfigError};
pub use error::BiosError;
pub use forwarder::{Forwarder, ForwarderConfig};
