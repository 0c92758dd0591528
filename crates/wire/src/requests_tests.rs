// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn store_request_decodes_base64_data() {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(b"hello");
    let req = StoreRequest {
        action: Some("add.object".to_string()),
        store_name: "archives".to_string(),
        object_name: Some("math.zip".to_string()),
        data: Some(encoded),
    };
    assert_eq!(req.decoded_data().unwrap(), Some(b"hello".to_vec()));
}

#[test]
fn store_request_without_data_decodes_to_none() {
    let req = StoreRequest {
        action: None,
        store_name: "archives".to_string(),
        object_name: None,
        data: None,
    };
    assert_eq!(req.decoded_data().unwrap(), None);
}

#[test]
fn store_request_rejects_malformed_base64() {
    let req = StoreRequest {
        action: None,
        store_name: "archives".to_string(),
        object_name: None,
        data: Some("not valid base64!!".to_string()),
    };
    assert!(req.decoded_data().is_err());
}

#[test]
fn systemctl_request_deserializes_name_form() {
    let json = r#"{"action":"start","name":"math.service"}"#;
    let req: SystemctlRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.name.as_deref(), Some("math.service"));
    assert_eq!(req.app_id, None);
}

#[test]
fn systemctl_request_deserializes_app_id_version_form() {
    let json = r#"{"app_id":"math","version":"1.0.0"}"#;
    let req: SystemctlRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.name, None);
    assert_eq!(req.app_id.as_deref(), Some("math"));
}

#[test]
fn rule_request_defaults_properties_to_empty_map() {
    let json = r#"{"name":"r1","script":"1 + 2 * 3"}"#;
    let req: RuleRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.name, "r1");
    assert!(req.properties.is_empty());
}
