use std::process::ExitCode;

use anyhow::Context;
use mission_config::MissionConfig;
use mission_core::read_string_list;
use serde::Serialize;

use crate::cli::{ArtifactsArgs, GlobalFlags};
use crate::ui;

#[derive(Debug, Serialize)]
struct SavedObservables {
    mac_addresses: Vec<String>,
    sha256_hashes: Vec<String>,
}

/// Handle `amp-mission artifacts`: show what the last run saved.
pub fn handle(
    args: &ArtifactsArgs,
    flags: &GlobalFlags,
    config: &MissionConfig,
) -> anyhow::Result<ExitCode> {
    let paths = config.output.artifact_paths(&flags.root_dir()?);

    let saved = SavedObservables {
        mac_addresses: read_string_list(&paths.mac_addresses)
            .context("failed to read MAC address artifact")?,
        sha256_hashes: read_string_list(&paths.sha256_hashes)
            .context("failed to read SHA256 artifact")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(ExitCode::SUCCESS);
    }

    ui::header(&format!(
        "MAC addresses ({}) in {}",
        saved.mac_addresses.len(),
        paths.mac_addresses.display()
    ));
    for mac in &saved.mac_addresses {
        println!("{mac}");
    }

    ui::header(&format!(
        "SHA256 hashes ({}) in {}",
        saved.sha256_hashes.len(),
        paths.sha256_hashes.display()
    ));
    for hash in &saved.sha256_hashes {
        println!("{hash}");
    }

    if saved.mac_addresses.len() != saved.sha256_hashes.len() {
        ui::failure("Artifact files have different lengths; they are not from the same run.");
    }

    Ok(ExitCode::SUCCESS)
}
