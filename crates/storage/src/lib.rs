// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content-addressable blob storage facade over JetStream-equivalent
//! object store buckets.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
mod object_store;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use error::StorageError;
pub use object_store::{BucketConfig, NatsObjectStore, ObjectStore};

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeObjectStore;
