// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types shared by every side of the bus: the response envelope, the
//! per-resource request bodies, and RQL result encoding.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod envelope;
mod requests;
mod rql;

pub use envelope::Envelope;
pub use requests::{
    AppManagerRequest, GitManagerRequest, RuleRequest, StoreRequest, SystemctlRequest,
};
pub use rql::encode_rql_value;
