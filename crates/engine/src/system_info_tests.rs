use super::*;

#[test]
fn read_fills_every_field() {
    let info = SystemInfo::read();
    assert!(!info.os.is_empty());
    assert!(!info.hostname.is_empty());
}

#[test]
fn getters_return_stored_values() {
    let mut info = SystemInfo { hostname: "edge-01".into(), os: "linux".into(), uptime_seconds: 42 };
    assert_eq!(info.hostname(), "edge-01");
    assert_eq!(info.os(), "linux");
    assert_eq!(info.uptime_seconds(), 42);
}
