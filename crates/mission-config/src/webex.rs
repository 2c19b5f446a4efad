//! Webex Teams configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://webexapis.com/v1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebexConfig {
    /// Bearer token of the bot or user posting the message.
    #[serde(default)]
    pub access_token: String,

    /// Room that receives the completion message.
    #[serde(default)]
    pub room_id: String,

    /// REST API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for WebexConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            room_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl WebexConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.access_token.is_empty() {
            missing.push("access_token");
        }
        if self.room_id.is_empty() {
            missing.push("room_id");
        }
        if self.base_url.is_empty() {
            missing.push("base_url");
        }
        missing
    }
}
