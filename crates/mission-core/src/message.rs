//! Chat message bodies.

/// Markdown posted to the team room when the mission finishes.
#[must_use]
pub fn mission_complete(observable_count: usize) -> String {
    format!(
        "**AMP Mission completed!!!**\n\
         I extracted observables from {observable_count} AMP malware events."
    )
}
