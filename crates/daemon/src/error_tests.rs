// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn unknown_action_maps_to_unknown_command_code() {
    let err = BiosError::UnknownAction { resource: "apps.manager".to_string(), op: "frobnicate".to_string() };
    let env = err.to_envelope();
    assert_eq!(env.code, 902);
}

#[test]
fn invalid_params_maps_to_400() {
    let err = BiosError::InvalidParams("missing field `name`".to_string());
    assert_eq!(err.code().code(), 400);
}

#[test]
fn bus_timeout_maps_to_generic_error_code() {
    let err = BiosError::Bus(crate::bus::BusError::Timeout {
        subject: "n.get.system.ping".to_string(),
        timeout: std::time::Duration::from_secs(5),
    });
    assert_eq!(err.code().code(), 500);
}

#[test]
fn core_error_kind_keeps_its_own_code() {
    let err = BiosError::Core(BiosErrorKind::InvalidParams("bad".to_string()));
    assert_eq!(err.code().code(), 400);
}
