//! Seams between the pipeline and the outside world.
//!
//! `mission-amp` implements [`EventSource`] over the AMP REST API and
//! `mission-webex` implements [`ChatNotifier`] over Webex Teams. Tests drive
//! the pipeline with in-memory implementations.

use std::future::Future;

use crate::event::{Event, EventFilter};

/// Something that can produce AMP events.
pub trait EventSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch events matching `filter`.
    ///
    /// Implementations must fail without returning partial results.
    fn fetch_events(
        &self,
        filter: &EventFilter,
    ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send;
}

/// Something that can post a markdown message to the mission's chat room.
pub trait ChatNotifier {
    type Error: std::error::Error + Send + Sync + 'static;

    fn post_markdown(&self, markdown: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
