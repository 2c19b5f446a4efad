//! Cisco AMP for Endpoints API configuration.

use serde::{Deserialize, Serialize};

/// Default AMP API host (North America cloud).
fn default_host() -> String {
    String::from("api.amp.cisco.com")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AmpConfig {
    /// API host name, without scheme (e.g. `api.eu.amp.cisco.com`).
    #[serde(default = "default_host")]
    pub host: String,

    /// Third-party API client id.
    #[serde(default)]
    pub client_id: String,

    /// API key paired with `client_id`.
    #[serde(default)]
    pub api_key: String,

    /// Verify the server's TLS certificate. Off by default, as in the lab
    /// environment the mission was written for.
    #[serde(default)]
    pub verify_tls: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Full base URL overriding `https://{host}`, e.g. for a local mirror.
    /// Empty means derive it from `host`.
    #[serde(default)]
    pub base_url: String,
}

impl Default for AmpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            client_id: String::new(),
            api_key: String::new(),
            verify_tls: false,
            timeout_secs: default_timeout_secs(),
            base_url: String::new(),
        }
    }
}

impl AmpConfig {
    /// Check if the AMP config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields that are empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_empty() {
            missing.push("host");
        }
        if self.client_id.is_empty() {
            missing.push("client_id");
        }
        if self.api_key.is_empty() {
            missing.push("api_key");
        }
        missing
    }

    /// Base URL of the API, e.g. `https://api.amp.cisco.com`.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        if self.base_url.is_empty() {
            format!("https://{}", self.host)
        } else {
            self.base_url.trim_end_matches('/').to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AmpConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.missing_fields(), vec!["client_id", "api_key"]);
        assert_eq!(config.host, "api.amp.cisco.com");
        assert!(!config.verify_tls);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn configured_with_credentials() {
        let config = AmpConfig {
            client_id: "a1b2c3d4e5f6g7h8i9j0".into(),
            api_key: "a1b2c3d4-e5f6-g7h8-i9j0-k1l2m3n4o5p6".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.endpoint_url(), "https://api.amp.cisco.com");
    }

    #[test]
    fn base_url_overrides_host() {
        let config = AmpConfig {
            host: "api.eu.amp.cisco.com".into(),
            base_url: "http://127.0.0.1:8080/".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:8080");
    }
}
