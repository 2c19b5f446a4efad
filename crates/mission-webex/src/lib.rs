//! # mission-webex
//!
//! Minimal Webex Teams client: creates one markdown message in a room.
//!
//! Calls the REST API directly via `reqwest` with a bearer token. Only
//! `POST /messages` is used.

use std::time::Duration;

use mission_config::WebexConfig;
use mission_core::ChatNotifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the Webex messages API.
#[derive(Debug, Error)]
pub enum WebexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webex API error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessage<'a> {
    room_id: &'a str,
    markdown: &'a str,
}

/// The subset of the created message we log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
}

pub struct WebexClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    room_id: String,
}

impl std::fmt::Debug for WebexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebexClient")
            .field("base_url", &self.base_url)
            .field("room_id", &self.room_id)
            .finish_non_exhaustive()
    }
}

impl WebexClient {
    /// # Errors
    ///
    /// Returns [`WebexError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &WebexConfig) -> Result<Self, WebexError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("amp-mission/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            room_id: config.room_id.clone(),
        })
    }

    /// Post `markdown` to the configured room.
    ///
    /// # Errors
    ///
    /// Returns [`WebexError::Api`] for non-success statuses (bad token,
    /// unknown room, ...) and [`WebexError::Http`] for transport failures.
    pub async fn create_message(&self, markdown: &str) -> Result<Message, WebexError> {
        let url = format!("{}/messages", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&CreateMessage {
                room_id: &self.room_id,
                markdown,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(WebexError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let message: Message = resp.json().await?;
        tracing::info!(
            message_id = %message.id,
            room_id = message.room_id.as_deref().unwrap_or(&self.room_id),
            "posted message to Webex Teams"
        );
        Ok(message)
    }
}

impl ChatNotifier for WebexClient {
    type Error = WebexError;

    async fn post_markdown(&self, markdown: &str) -> Result<(), WebexError> {
        self.create_message(markdown).await.map(|_| ())
    }
}
