//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::Path;

use figment::Jail;
use mission_config::MissionConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_local_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "amp-mission.toml",
            r#"
[amp]
host = "api.eu.amp.cisco.com"
client_id = "toml-client"
api_key = "toml-key"
verify_tls = true
timeout_secs = 5

[webex]
access_token = "toml-token"
room_id = "toml-room"

[output]
data_dir = "out"
"#,
        )?;

        let config = MissionConfig::load(None).expect("config loads");

        assert_eq!(config.amp.host, "api.eu.amp.cisco.com");
        assert_eq!(config.amp.client_id, "toml-client");
        assert_eq!(config.amp.api_key, "toml-key");
        assert!(config.amp.verify_tls);
        assert_eq!(config.amp.timeout_secs, 5);
        assert_eq!(config.amp.endpoint_url(), "https://api.eu.amp.cisco.com");
        assert_eq!(config.webex.access_token, "toml-token");
        assert_eq!(config.webex.room_id, "toml-room");
        assert_eq!(config.webex.base_url, "https://webexapis.com/v1");
        assert_eq!(config.output.data_dir, "out");
        assert_eq!(config.output.mac_file, "macaddr.json");
        assert!(config.validate(true).is_ok());
        Ok(())
    });
}

#[test]
fn explicit_config_file_replaces_local_one() {
    Jail::expect_with(|jail| {
        jail.create_file("amp-mission.toml", "[amp]\nclient_id = \"local\"\n")?;
        jail.create_file("other.toml", "[amp]\nclient_id = \"explicit\"\n")?;

        let config = MissionConfig::load(Some(Path::new("other.toml"))).expect("config loads");
        assert_eq!(config.amp.client_id, "explicit");
        Ok(())
    });
}

#[test]
fn defaults_fill_unset_sections() {
    Jail::expect_with(|jail| {
        jail.create_file("amp-mission.toml", "[amp]\napi_key = \"only-key\"\n")?;

        let config = MissionConfig::load(None).expect("config loads");
        assert_eq!(config.amp.api_key, "only-key");
        assert_eq!(config.amp.host, "api.amp.cisco.com");
        assert!(!config.amp.verify_tls);
        assert_eq!(config.output.data_dir, "mission-data");
        assert_eq!(config.output.sha256_file, "sha256list.json");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("amp-mission.toml", "[amp]\ntimeout_secs = \"soon\"\n")?;

        let result = MissionConfig::load(None);
        assert!(matches!(
            result,
            Err(mission_config::ConfigError::Figment(_))
        ));
        Ok(())
    });
}

#[test]
fn local_config_is_looked_up_under_root() {
    Jail::expect_with(|jail| {
        std::fs::create_dir("project").expect("create project dir");
        jail.create_file("amp-mission.toml", "[amp]\nclient_id = \"cwd\"\n")?;
        jail.create_file("project/amp-mission.toml", "[amp]\nclient_id = \"project\"\n")?;

        let config = MissionConfig::load_in(Path::new("project"), None).expect("config loads");
        assert_eq!(config.amp.client_id, "project");
        Ok(())
    });
}

#[test]
fn root_without_local_config_ignores_cwd_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir("empty-root").expect("create root dir");
        jail.create_file("amp-mission.toml", "[amp]\nclient_id = \"cwd\"\n")?;

        let config = MissionConfig::load_in(Path::new("empty-root"), None).expect("config loads");
        assert_eq!(config.amp.client_id, "");
        Ok(())
    });
}
