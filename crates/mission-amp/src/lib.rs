//! # mission-amp
//!
//! Client for the Cisco AMP for Endpoints event API (`GET /v1/events`).
//!
//! Credentials are sent as HTTP basic auth (`client_id:api_key`) by the
//! client rather than embedded in the URL. Certificate verification follows
//! [`AmpConfig::verify_tls`], which is off by default.
//!
//! One request per call: no retry, no pagination.

mod error;
mod http;

pub use error::AmpError;

use std::time::Duration;

use mission_config::AmpConfig;
use mission_core::{Event, EventFilter, EventSource};
use serde::Deserialize;

use crate::http::check_response;

#[derive(Deserialize)]
struct EventsResponse {
    #[serde(default)]
    metadata: Option<Metadata>,
    data: Vec<Event>,
}

#[derive(Deserialize)]
struct Metadata {
    results: Option<ResultsMetadata>,
}

#[derive(Deserialize)]
struct ResultsMetadata {
    total: Option<u64>,
}

/// Authenticated AMP API client.
pub struct AmpClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    api_key: String,
}

impl std::fmt::Debug for AmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmpClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl AmpClient {
    /// Create a client for `https://{config.host}`.
    ///
    /// # Errors
    ///
    /// Returns [`AmpError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &AmpConfig) -> Result<Self, AmpError> {
        Self::with_base_url(config, config.endpoint_url())
    }

    /// Create a client against an explicit base URL (scheme included).
    ///
    /// # Errors
    ///
    /// Returns [`AmpError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn with_base_url(config: &AmpConfig, base_url: impl Into<String>) -> Result<Self, AmpError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("amp-mission/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        if !config.verify_tls {
            tracing::debug!("TLS certificate verification disabled for AMP");
        }

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of the events endpoint for `filter`.
    #[must_use]
    pub fn events_url(&self, filter: &EventFilter) -> String {
        let mut params = Vec::new();
        for event_type in &filter.event_types {
            params.push(format!("{}={event_type}", urlencoding::encode("event_type[]")));
        }
        if let Some(limit) = filter.limit {
            params.push(format!("limit={limit}"));
        }

        if params.is_empty() {
            format!("{}/v1/events", self.base_url)
        } else {
            format!("{}/v1/events?{}", self.base_url, params.join("&"))
        }
    }

    /// Get recent events from AMP.
    ///
    /// # Errors
    ///
    /// Returns [`AmpError`] if the request fails, AMP returns a non-success
    /// status, or the body has no `data` array of events. Nothing is
    /// returned on failure.
    pub async fn get_events(&self, filter: &EventFilter) -> Result<Vec<Event>, AmpError> {
        let url = self.events_url(filter);
        tracing::debug!(%url, "requesting AMP events");

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.client_id, Some(&self.api_key))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let parsed: EventsResponse =
            serde_json::from_str(&body).map_err(|e| AmpError::Parse(e.to_string()))?;

        let total = parsed
            .metadata
            .and_then(|m| m.results)
            .and_then(|r| r.total);
        tracing::info!(
            received = parsed.data.len(),
            total = ?total,
            "retrieved events from AMP"
        );

        Ok(parsed.data)
    }
}

impl EventSource for AmpClient {
    type Error = AmpError;

    async fn fetch_events(&self, filter: &EventFilter) -> Result<Vec<Event>, AmpError> {
        self.get_events(filter).await
    }
}
