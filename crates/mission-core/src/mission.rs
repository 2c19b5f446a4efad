//! The mission pipeline: fetch → extract → write → notify.
//!
//! Every step is awaited in order and the first failure ends the run. There
//! is no retry and no partial-success reporting.

use std::path::Path;

use thiserror::Error;

use crate::artifacts::{ArtifactPaths, write_artifacts};
use crate::errors::{ArtifactError, ExtractError};
use crate::event::EventFilter;
use crate::extract::extract_observables;
use crate::message;
use crate::observable::Observable;
use crate::source::{ChatNotifier, EventSource};

/// Failure of one pipeline stage.
#[derive(Debug, Error)]
pub enum MissionError<F, N>
where
    F: std::error::Error + 'static,
    N: std::error::Error + 'static,
{
    #[error("failed to fetch events from AMP")]
    Fetch(#[source] F),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Artifacts(#[from] ArtifactError),

    #[error("failed to post completion message")]
    Notify(#[source] N),
}

impl<F, N> MissionError<F, N>
where
    F: std::error::Error + 'static,
    N: std::error::Error + 'static,
{
    /// True when the run ended because no malware events were found.
    #[must_use]
    pub const fn is_no_observables(&self) -> bool {
        matches!(self, Self::Extract(ExtractError::NoObservablesFound { .. }))
    }
}

/// Progress notifications emitted while the mission runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Fetching,
    Fetched { events: usize },
    Extracting,
    Extracted { observables: usize },
    Writing { mac_addresses: &'a Path, sha256_hashes: &'a Path },
    Notifying,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    pub events_received: usize,
    pub observables: Vec<Observable>,
    pub paths: ArtifactPaths,
    /// False when the run was configured without a notifier.
    pub notified: bool,
}

pub struct Mission<S, N> {
    source: S,
    notifier: Option<N>,
    paths: ArtifactPaths,
}

impl<S, N> Mission<S, N>
where
    S: EventSource,
    N: ChatNotifier,
{
    /// Build a mission. Pass `None` as `notifier` to skip the chat step.
    pub const fn new(source: S, notifier: Option<N>, paths: ArtifactPaths) -> Self {
        Self {
            source,
            notifier,
            paths,
        }
    }

    #[must_use]
    pub const fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Run the mission without progress callbacks.
    ///
    /// # Errors
    ///
    /// See [`Mission::run_with`].
    pub async fn run(
        &self,
        filter: &EventFilter,
    ) -> Result<MissionReport, MissionError<S::Error, N::Error>> {
        self.run_with(filter, |_| {}).await
    }

    /// Run the mission, calling `on_stage` before and after each step.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`MissionError`]. An empty
    /// malware set is reported as [`MissionError::Extract`] wrapping
    /// [`ExtractError::NoObservablesFound`], before any file is touched.
    pub async fn run_with<C>(
        &self,
        filter: &EventFilter,
        mut on_stage: C,
    ) -> Result<MissionReport, MissionError<S::Error, N::Error>>
    where
        C: FnMut(Stage<'_>),
    {
        on_stage(Stage::Fetching);
        let events = self
            .source
            .fetch_events(filter)
            .await
            .map_err(MissionError::Fetch)?;
        on_stage(Stage::Fetched {
            events: events.len(),
        });

        on_stage(Stage::Extracting);
        let observables = extract_observables(&events)?;
        on_stage(Stage::Extracted {
            observables: observables.len(),
        });

        on_stage(Stage::Writing {
            mac_addresses: &self.paths.mac_addresses,
            sha256_hashes: &self.paths.sha256_hashes,
        });
        write_artifacts(&observables, &self.paths)?;

        let notified = match &self.notifier {
            Some(notifier) => {
                on_stage(Stage::Notifying);
                notifier
                    .post_markdown(&message::mission_complete(observables.len()))
                    .await
                    .map_err(MissionError::Notify)?;
                true
            }
            None => {
                tracing::info!("chat notification disabled, skipping");
                false
            }
        };

        Ok(MissionReport {
            events_received: events.len(),
            observables,
            paths: self.paths.clone(),
            notified,
        })
    }
}
