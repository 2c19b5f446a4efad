//! Observables extracted from malware events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ExtractError;
use crate::event::Event;

/// Indicators taken from a single malware detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observable {
    pub hostname: String,
    pub ip_address: String,
    pub mac_address: String,
    pub sha256: String,
}

/// A string field the mission reads, addressed by a JSON pointer below one
/// top-level vendor key.
struct Field {
    key: &'static str,
    pointer: &'static str,
    path: &'static str,
}

const HOSTNAME: Field = Field {
    key: "computer",
    pointer: "/hostname",
    path: "computer.hostname",
};
const IP: Field = Field {
    key: "computer",
    pointer: "/network_addresses/0/ip",
    path: "computer.network_addresses[0].ip",
};
const MAC: Field = Field {
    key: "computer",
    pointer: "/network_addresses/0/mac",
    path: "computer.network_addresses[0].mac",
};
const SHA256: Field = Field {
    key: "file",
    pointer: "/identity/sha256",
    path: "file.identity.sha256",
};

impl Observable {
    /// Read the observable fields out of a malware event.
    ///
    /// Only the first network address of the computer is used.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedEvent`] if any of `computer.hostname`,
    /// `computer.network_addresses[0].ip`, `computer.network_addresses[0].mac`
    /// or `file.identity.sha256` is missing or not a string. The reason names
    /// the offending field.
    pub fn from_event(index: usize, event: &Event) -> Result<Self, ExtractError> {
        let malformed = |reason: String| ExtractError::MalformedEvent { index, reason };

        let addresses = event
            .details
            .get("computer")
            .and_then(|computer| computer.get("network_addresses"));
        if addresses.and_then(Value::as_array).is_some_and(Vec::is_empty) {
            return Err(malformed("computer.network_addresses is empty".to_string()));
        }

        let read = |field: &Field| string_field(event, field).map_err(malformed);
        Ok(Self {
            hostname: read(&HOSTNAME)?,
            ip_address: read(&IP)?,
            mac_address: read(&MAC)?,
            sha256: read(&SHA256)?,
        })
    }
}

fn string_field(event: &Event, field: &Field) -> Result<String, String> {
    match event
        .details
        .get(field.key)
        .and_then(|value| value.pointer(field.pointer))
    {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(format!(
            "{}: expected a string, found {}",
            field.path,
            json_kind(other)
        )),
        None => Err(format!("{}: missing field", field.path)),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
