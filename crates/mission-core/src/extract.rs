//! Malware event filtering and observable extraction.

use crate::errors::ExtractError;
use crate::event::Event;
use crate::observable::Observable;

/// Iterate over the malware detections in `events`, in input order.
pub fn malware_events(events: &[Event]) -> impl Iterator<Item = (usize, &Event)> {
    events.iter().enumerate().filter(|(_, e)| e.is_malware())
}

/// Extract hash, IP and MAC observables from the malware events in `events`.
///
/// Non-malware events are skipped without being inspected. Malware events are
/// read strictly: one malformed detection fails the whole extraction.
///
/// # Errors
///
/// - [`ExtractError::MalformedEvent`] if a malware event lacks a required field.
/// - [`ExtractError::NoObservablesFound`] if no event is a malware detection.
pub fn extract_observables(events: &[Event]) -> Result<Vec<Observable>, ExtractError> {
    let observables = malware_events(events)
        .map(|(index, event)| Observable::from_event(index, event))
        .collect::<Result<Vec<_>, _>>()?;

    if observables.is_empty() {
        tracing::warn!(scanned = events.len(), "no malware events found");
        return Err(ExtractError::NoObservablesFound {
            scanned: events.len(),
        });
    }

    tracing::info!(
        count = observables.len(),
        scanned = events.len(),
        "extracted observables from malware events"
    );
    Ok(observables)
}
