//! Artifact output locations.

use std::path::Path;

use mission_core::ArtifactPaths;
use mission_core::artifacts::{DEFAULT_DATA_DIR, MAC_ADDRESSES_FILE, SHA256_HASHES_FILE};
use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    String::from(DEFAULT_DATA_DIR)
}

fn default_mac_file() -> String {
    String::from(MAC_ADDRESSES_FILE)
}

fn default_sha256_file() -> String {
    String::from(SHA256_HASHES_FILE)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for artifact files, relative to the repository root unless absolute.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_mac_file")]
    pub mac_file: String,

    #[serde(default = "default_sha256_file")]
    pub sha256_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            mac_file: default_mac_file(),
            sha256_file: default_sha256_file(),
        }
    }
}

impl OutputConfig {
    /// Resolve the artifact file paths against `root`.
    #[must_use]
    pub fn artifact_paths(&self, root: &Path) -> ArtifactPaths {
        let dir = root.join(&self.data_dir);
        ArtifactPaths {
            mac_addresses: dir.join(&self.mac_file),
            sha256_hashes: dir.join(&self.sha256_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_paths_match_mission_layout() {
        let paths = OutputConfig::default().artifact_paths(Path::new("/repo"));
        assert_eq!(paths, ArtifactPaths::in_dir("/repo/mission-data"));
    }

    #[test]
    fn absolute_data_dir_ignores_root() {
        let config = OutputConfig {
            data_dir: "/var/lib/mission".into(),
            ..Default::default()
        };
        let paths = config.artifact_paths(Path::new("/repo"));
        assert_eq!(
            paths.mac_addresses,
            PathBuf::from("/var/lib/mission/macaddr.json")
        );
    }
}
