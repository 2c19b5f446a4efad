//! # mission-core
//!
//! Domain types and pipeline for the AMP zero-day mission.
//!
//! The mission is a straight-line sequence:
//! 1. fetch recent events from AMP for Endpoints ([`EventSource`])
//! 2. keep malware detections and extract their observables ([`extract_observables`])
//! 3. write the MAC and SHA-256 lists to disk ([`write_artifacts`])
//! 4. post a completion message to a chat room ([`ChatNotifier`])
//!
//! HTTP clients live in `mission-amp` and `mission-webex`; this crate only
//! defines the seams they plug into, so the pipeline can be driven by fakes
//! in tests.

pub mod artifacts;
pub mod errors;
pub mod event;
pub mod extract;
pub mod message;
pub mod mission;
pub mod observable;
pub mod source;

pub use artifacts::{ArtifactPaths, read_string_list, write_artifacts};
pub use errors::{ArtifactError, ExtractError};
pub use event::{Event, EventFilter, MALWARE_EVENT_TYPE_ID};
pub use extract::{extract_observables, malware_events};
pub use mission::{Mission, MissionError, MissionReport, Stage};
pub use observable::Observable;
pub use source::{ChatNotifier, EventSource};
