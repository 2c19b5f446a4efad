//! Error types for extraction and artifact persistence.
//!
//! Transport errors are defined next to their clients (`AmpError`,
//! `WebexError`); the pipeline wraps them in [`crate::MissionError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning events into observables.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// None of the scanned events was a malware detection.
    #[error("No malware events found (scanned {scanned} events)")]
    NoObservablesFound { scanned: usize },

    /// A malware event lacked one of the fields the mission needs.
    #[error("Malformed malware event at index {index}: {reason}")]
    MalformedEvent { index: usize, reason: String },
}

/// Errors raised while reading or writing the artifact JSON files.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
