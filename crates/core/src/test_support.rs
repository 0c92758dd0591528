// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders and fixtures shared by this crate's own tests and by downstream
//! crates' test suites (gated behind the `test-support` feature so none of
//! it ships in release builds).

use crate::app::AppDescriptor;
use crate::host::Host;
use crate::subject::{Scope, SubjectBuilder, Verb};

/// A host fixture with deterministic, easy-to-eyeball field values.
pub fn sample_host(uuid: &str) -> Host {
    Host::new(uuid, format!("edge-{uuid}"), "10.0.0.1")
}

/// An app descriptor fixture.
pub fn sample_app(name: &str) -> AppDescriptor {
    AppDescriptor::new(name, "1.0.0")
}

/// A bios-scoped subject builder bound to a fixed test UUID.
pub fn bios_builder() -> SubjectBuilder {
    SubjectBuilder::new(Scope::Bios, "test-uuid", "")
}

/// Build a `{resource}.{op}` bios subject as a plain string, for assertions
/// that don't want to reach for [`crate::subject::Subject`] directly.
pub fn bios_subject_str(resource: &str, op: &str) -> String {
    bios_builder().build_subject(Verb::Get, resource, op).as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_host_is_active() {
        assert!(sample_host("abc").is_active());
    }

    #[test]
    fn bios_subject_str_uses_fixed_uuid() {
        assert_eq!(bios_subject_str("apps.manager", "list"), "test-uuid.get.apps.manager.list");
    }
}
