// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn timeout_error_message_includes_duration() {
    let err = ExecError::Timeout { command: "sleep".to_string(), timeout: Duration::from_secs(2) };
    assert!(err.to_string().contains("sleep"));
    assert!(err.to_string().contains("timed out"));
}

#[test]
fn spawn_failed_message_includes_command() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = ExecError::SpawnFailed { command: "missing".to_string(), source: io };
    assert!(err.to_string().contains("missing"));
}
