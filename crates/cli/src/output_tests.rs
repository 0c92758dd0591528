use flexbios_wire::Envelope;

use super::*;

#[test]
fn print_envelope_handles_empty_array_payload() {
    let envelope = Envelope::ok(serde_json::json!([]));
    print_envelope(OutputFormat::Text, &envelope);
    print_envelope(OutputFormat::Json, &envelope);
}

#[test]
fn print_envelope_handles_string_payload() {
    let envelope = Envelope::ok(serde_json::json!("node-a"));
    print_envelope(OutputFormat::Text, &envelope);
    print_envelope(OutputFormat::Json, &envelope);
}

#[test]
fn print_error_envelope_renders_both_formats() {
    let envelope = Envelope::error(flexbios_core::ResponseCode::UnknownCommand, serde_json::json!("boom"));
    print_error_envelope(OutputFormat::Text, &envelope);
    print_error_envelope(OutputFormat::Json, &envelope);
}
