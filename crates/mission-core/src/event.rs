//! AMP event records as returned by `GET /v1/events`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// AMP event type id for "Threat Detected" (malware) events.
///
/// The API returns this as an integer, not a string.
pub const MALWARE_EVENT_TYPE_ID: u64 = 1_107_296_272;

/// One event from the AMP event stream.
///
/// Only `event_type_id` is required. Everything the mission does not name
/// explicitly is kept verbatim in [`Event::details`] and only inspected for
/// malware events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Human-readable event type (e.g. `Threat Detected`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Remaining vendor fields (`computer`, `file`, `detection`, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Event {
    #[must_use]
    pub const fn is_malware(&self) -> bool {
        self.event_type_id == MALWARE_EVENT_TYPE_ID
    }
}

/// Server-side filters for the event query.
///
/// The default filter requests the plain event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Restrict to these event type ids (`event_type[]=...`).
    pub event_types: Vec<u64>,
    /// Maximum number of events to return (`limit=...`).
    pub limit: Option<u32>,
}

impl EventFilter {
    /// Filter for malware detections only.
    #[must_use]
    pub fn malware() -> Self {
        Self {
            event_types: vec![MALWARE_EVENT_TYPE_ID],
            limit: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_types.is_empty() && self.limit.is_none()
    }
}
