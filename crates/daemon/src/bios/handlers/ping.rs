// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `global.get.system.ping` and `{uuid}.get.system.ping`: the one reply
//! shape that doesn't fit the generic [`flexbios_wire::Envelope`] — it
//! carries an extra `description` field alongside `code`/`message`/
//! `payload` (spec.md §6).

use serde::Serialize;

use flexbios_core::ResponseCode;

use crate::bios::BiosSupervisor;

#[derive(Serialize)]
struct PingReply {
    code: u32,
    message: String,
    payload: String,
    description: String,
}

pub fn reply(sup: &BiosSupervisor) -> Vec<u8> {
    let body = PingReply {
        code: ResponseCode::Success.code(),
        message: ResponseCode::Success.message().to_string(),
        payload: sup.global_uuid.clone(),
        description: sup.config.description.clone(),
    };
    serde_json::to_vec(&body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::reply;
    use crate::bios::test_supervisor;

    #[test]
    fn reply_carries_uuid_and_description() {
        let dir = tempfile::tempdir().unwrap();
        let harness = test_supervisor(dir.path().to_path_buf());

        let bytes = reply(&harness.sup);
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["payload"], "node-test");
        assert_eq!(value["description"], "test node");
    }
}
