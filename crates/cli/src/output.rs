// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering a bus [`Envelope`] to stdout, in text or JSON form.

use clap::ValueEnum;
use flexbios_wire::Envelope;

use crate::color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Prints a successful envelope's payload, in the requested format.
pub fn print_envelope(format: OutputFormat, envelope: &Envelope) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&envelope.payload).unwrap_or_else(|_| envelope.payload.to_string()));
        }
        OutputFormat::Text => print_payload_text(&envelope.payload),
    }
}

fn print_payload_text(payload: &serde_json::Value) {
    match payload {
        serde_json::Value::Array(items) if items.is_empty() => {
            println!("{}", color::muted("(none)"));
        }
        serde_json::Value::Array(items) => {
            for item in items {
                println!("{}", render_scalar(item));
            }
        }
        serde_json::Value::Null => println!("{}", color::muted("(none)")),
        other => println!("{}", render_scalar(other)),
    }
}

fn render_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => color::literal(s),
        other => color::literal(&other.to_string()),
    }
}

/// Prints a remote error envelope to stderr, in the requested format.
pub fn print_error_envelope(format: OutputFormat, envelope: &Envelope) {
    match format {
        OutputFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(envelope).unwrap_or_else(|_| envelope.to_string()));
        }
        OutputFormat::Text => {
            eprintln!("{} {}", color::header(&format!("[{}]", envelope.code)), envelope.message);
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
