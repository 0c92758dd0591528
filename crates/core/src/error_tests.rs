// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    success = { ResponseCode::Success, 200 },
    invalid_params = { ResponseCode::InvalidParams, 400 },
    token_invalid = { ResponseCode::TokenInvalid, 401 },
    generic_error = { ResponseCode::GenericError, 500 },
    unknown_error = { ResponseCode::UnknownError, 900 },
    unknown_command = { ResponseCode::UnknownCommand, 902 },
    auth_missing_token = { ResponseCode::AuthMissingToken, 20001 },
    auth_unknown_reason = { ResponseCode::AuthUnknownReason, 20009 },
)]
fn code_values_are_wire_stable(code: ResponseCode, expected: u32) {
    assert_eq!(code.code(), expected);
    assert_eq!(ResponseCode::try_from(expected), Ok(code));
}

#[test]
fn try_from_rejects_unknown_code() {
    assert_eq!(ResponseCode::try_from(12345), Err(12345));
}

#[test]
fn response_code_round_trips_through_json() {
    let json = serde_json::to_string(&ResponseCode::AuthExpiredToken).unwrap();
    assert_eq!(json, "20003");
    let back: ResponseCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ResponseCode::AuthExpiredToken);
}

#[test]
fn unknown_command_maps_to_902() {
    let err = BiosErrorKind::UnknownCommand { resource: "foo".into(), op: "bar".into() };
    assert_eq!(err.code(), ResponseCode::UnknownCommand);
    assert!(err.message().contains("foo.bar"));
}

#[test]
fn invalid_params_maps_to_400() {
    let err = BiosErrorKind::InvalidParams("missing field x".into());
    assert_eq!(err.code(), ResponseCode::InvalidParams);
}

#[test]
fn unauthorized_preserves_inner_auth_code() {
    let err = BiosErrorKind::Unauthorized(ResponseCode::AuthRateLimited);
    assert_eq!(err.code(), ResponseCode::AuthRateLimited);
}

#[test]
fn io_error_maps_to_generic_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
    let err: BiosErrorKind = io.into();
    assert_eq!(err.code(), ResponseCode::GenericError);
}
