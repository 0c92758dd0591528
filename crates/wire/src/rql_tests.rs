// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rhai::Dynamic;
use yare::parameterized;

#[parameterized(
    int = { Dynamic::from(42_i64), "42" },
    float = { Dynamic::from(1.5_f64), "1.5" },
    boolean = { Dynamic::from(true), "true" },
    string = { Dynamic::from("hello".to_string()), "hello" },
)]
fn scalars_encode_as_plain_text(value: Dynamic, expected: &str) {
    assert_eq!(encode_rql_value(value), expected.as_bytes());
}

#[test]
fn unit_encodes_as_empty_bytes() {
    assert_eq!(encode_rql_value(Dynamic::UNIT), Vec::<u8>::new());
}

#[test]
fn array_encodes_as_json() {
    let arr: rhai::Array = vec![Dynamic::from(1_i64), Dynamic::from(2_i64)];
    let encoded = encode_rql_value(Dynamic::from(arr));
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(value, serde_json::json!([1, 2]));
}

#[test]
fn map_encodes_as_json() {
    let mut map = rhai::Map::new();
    map.insert("sum".into(), Dynamic::from(3_i64));
    let encoded = encode_rql_value(Dynamic::from(map));
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(value, serde_json::json!({"sum": 3}));
}
