//! # mission-config
//!
//! Layered configuration loading for the AMP mission using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Lab environment variables (`AMP_CLIENT_ID`, `AMP_API_KEY`, `AMP_HOST`,
//!    `WEBEX_TEAMS_ACCESS_TOKEN`, `WEBEX_TEAMS_ROOM_ID`)
//! 2. Environment variables (`AMP_MISSION_*` prefix, `__` as separator)
//! 3. Explicit config file, or `amp-mission.toml` under the root directory
//!    (the current directory for [`MissionConfig::load`]) when none is given
//! 4. User-level `~/.config/amp-mission/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AMP_MISSION_AMP__CLIENT_ID` -> `amp.client_id`,
//! `AMP_MISSION_WEBEX__ROOM_ID` -> `webex.room_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mission_config::MissionConfig;
//!
//! let config = MissionConfig::load_with_dotenv(None).expect("config");
//! config.validate(true).expect("amp and webex configured");
//! println!("AMP host: {}", config.amp.host);
//! ```

mod amp;
mod error;
mod output;
mod webex;

pub use amp::AmpConfig;
pub use error::ConfigError;
pub use output::OutputConfig;
pub use webex::WebexConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "amp-mission.toml";

/// Flat variable names used by the lab's `env_user` / `env_lab` files,
/// mapped onto nested config keys.
const LAB_ENV_VARS: [(&str, &str); 5] = [
    ("AMP_HOST", "amp.host"),
    ("AMP_CLIENT_ID", "amp.client_id"),
    ("AMP_API_KEY", "amp.api_key"),
    ("WEBEX_TEAMS_ACCESS_TOKEN", "webex.access_token"),
    ("WEBEX_TEAMS_ROOM_ID", "webex.room_id"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MissionConfig {
    #[serde(default)]
    pub amp: AmpConfig,
    #[serde(default)]
    pub webex: WebexConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl MissionConfig {
    /// Load configuration from all sources (TOML files + environment variables),
    /// looking for the local config file in the current directory.
    ///
    /// Does NOT read `.env`; use [`MissionConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), config_file)
    }

    /// Like [`MissionConfig::load`], but the local config file is looked up
    /// under `root` instead of the current directory.
    ///
    /// # Errors
    ///
    /// See [`MissionConfig::load`].
    pub fn load_in(root: &Path, config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment_in(root, config_file).extract()?)
    }

    /// Load `.env` from the current directory, then all other sources.
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// See [`MissionConfig::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain rooted at the current directory.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        Self::figment_in(Path::new("."), config_file)
    }

    /// Build the figment provider chain.
    ///
    /// `config_file`, when given, is used as-is and replaces the local
    /// `amp-mission.toml` under `root`.
    #[must_use]
    pub fn figment_in(root: &Path, config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path =
            config_file.map_or_else(|| Self::local_config_path(root), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Env::prefixed("AMP_MISSION_").split("__"))
            .merge(Self::lab_env())
    }

    /// Path of the project-local config file under `root`.
    #[must_use]
    pub fn local_config_path(root: &Path) -> PathBuf {
        root.join(LOCAL_CONFIG_FILE)
    }

    /// Check once, at startup, that everything the run needs is present.
    ///
    /// `require_webex` is false when the chat notification is skipped.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotConfigured`] naming the first incomplete section.
    /// - [`ConfigError::InvalidValue`] for a zero timeout or empty output names.
    pub fn validate(&self, require_webex: bool) -> Result<(), ConfigError> {
        Self::require_section("amp", &self.amp.missing_fields())?;
        if require_webex {
            Self::require_section("webex", &self.webex.missing_fields())?;
        }

        if self.amp.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "amp.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }

        for (field, value) in [
            ("output.data_dir", &self.output.data_dir),
            ("output.mac_file", &self.output.mac_file),
            ("output.sha256_file", &self.output.sha256_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }

        Ok(())
    }

    fn require_section(section: &str, missing: &[&str]) -> Result<(), ConfigError> {
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: section.into(),
                missing: missing.join(", "),
            })
        }
    }

    fn lab_env() -> Env {
        Env::raw().filter_map(|key| {
            LAB_ENV_VARS
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("amp-mission").join("config.toml"))
    }
}
