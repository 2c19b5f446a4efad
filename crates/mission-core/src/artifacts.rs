//! Mission artifact files.
//!
//! Two JSON arrays of strings, indented by two spaces:
//! - `macaddr.json`: MAC addresses of the endpoints where malware executed
//! - `sha256list.json`: SHA-256 hashes of the detected files
//!
//! Both are overwritten wholesale on each run. The two writes are not atomic
//! as a pair; a failure after the first write leaves them out of sync.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ArtifactError;
use crate::observable::Observable;

pub const DEFAULT_DATA_DIR: &str = "mission-data";
pub const MAC_ADDRESSES_FILE: &str = "macaddr.json";
pub const SHA256_HASHES_FILE: &str = "sha256list.json";

/// Output locations for the two artifact files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub mac_addresses: PathBuf,
    pub sha256_hashes: PathBuf,
}

impl ArtifactPaths {
    /// Both files under `dir`, with their standard names.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            mac_addresses: dir.join(MAC_ADDRESSES_FILE),
            sha256_hashes: dir.join(SHA256_HASHES_FILE),
        }
    }
}

/// Write the MAC address list, then the SHA-256 list.
///
/// # Errors
///
/// Returns [`ArtifactError`] if a parent directory cannot be created or a
/// file cannot be written.
pub fn write_artifacts(observables: &[Observable], paths: &ArtifactPaths) -> Result<(), ArtifactError> {
    let macs: Vec<&str> = observables.iter().map(|o| o.mac_address.as_str()).collect();
    write_string_list(&paths.mac_addresses, &macs)?;

    let hashes: Vec<&str> = observables.iter().map(|o| o.sha256.as_str()).collect();
    write_string_list(&paths.sha256_hashes, &hashes)?;

    Ok(())
}

/// Write `items` to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] on filesystem failures.
pub fn write_string_list(path: &Path, items: &[&str]) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ArtifactError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(items).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = items.len(), "wrote artifact");
    Ok(())
}

/// Read an artifact file back as a list of strings.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] if the file cannot be read and
/// [`ArtifactError::Json`] if it is not a JSON array of strings.
pub fn read_string_list(path: &Path) -> Result<Vec<String>, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}
