// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use yare::parameterized;

use super::{parse_status_dump, SystemctlAction};

#[parameterized(
    start = { "start", true },
    stop = { "stop", true },
    restart = { "restart", true },
    enable = { "enable", true },
    disable = { "disable", true },
    frobnicate = { "frobnicate", false },
)]
fn action_try_from_closed_set(raw: &str, should_succeed: bool) {
    let result = SystemctlAction::try_from(raw);
    assert_eq!(result.is_ok(), should_succeed);
}

#[test]
fn status_dump_parses_active_and_pid() {
    let dump = "● mosquitto.service - Mosquitto broker\n   \
        Loaded: loaded\n   \
        Active: active (running) since Mon 2026-07-20 08:00:00 UTC; 1 week 2 days ago\n \
        Main PID: 1234 (mosquitto)\n      \
        Memory: 3.2M\n         CPU: 412ms\n";
    let status = parse_status_dump("mosquitto.service", dump);
    assert!(status.active);
    assert!(!status.failed);
    assert_eq!(status.pid, Some(1234));
    assert_eq!(status.memory.as_deref(), Some("3.2M"));
    assert_eq!(status.cpu.as_deref(), Some("412ms"));
    assert!(status.running_since.is_some());
}

#[test]
fn status_dump_detects_failed() {
    let dump = "Active: failed (Result: exit-code) since Mon 2026-07-20 08:00:00 UTC;\n";
    let status = parse_status_dump("unit.service", dump);
    assert!(!status.active);
    assert!(status.failed);
}
