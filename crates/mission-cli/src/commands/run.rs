use std::process::ExitCode;

use anyhow::Context;
use mission_amp::AmpClient;
use mission_config::MissionConfig;
use mission_core::{Mission, Stage};
use mission_webex::WebexClient;

use crate::cli::{GlobalFlags, RunArgs};
use crate::commands::EXIT_NO_OBSERVABLES;
use crate::progress::Progress;
use crate::ui;

/// Handle `amp-mission run`.
pub async fn handle(
    args: &RunArgs,
    flags: &GlobalFlags,
    config: &MissionConfig,
) -> anyhow::Result<ExitCode> {
    let notify = !args.skip_notify;
    config.validate(notify).context("invalid configuration")?;

    let root = flags.root_dir()?;
    let source = AmpClient::new(&config.amp).context("failed to build AMP client")?;
    let notifier = if notify {
        Some(WebexClient::new(&config.webex).context("failed to build Webex Teams client")?)
    } else {
        None
    };
    let mission = Mission::new(source, notifier, config.output.artifact_paths(&root));

    let mut spinner: Option<Progress> = None;
    let result = mission
        .run_with(&args.filter.to_filter(), |stage| match stage {
            Stage::Fetching => {
                ui::header("Getting recent events from AMP");
                spinner = Some(Progress::spinner("waiting for AMP"));
            }
            Stage::Fetched { events } => {
                if let Some(spinner) = spinner.take() {
                    spinner.finish_clear();
                }
                ui::success(&format!("Retrieved {events} events from AMP"));
            }
            Stage::Extracting => ui::header("Extracting observables from the AMP events"),
            Stage::Extracted { observables } => {
                ui::success(&format!(
                    "Extracted observables from {observables} malware events"
                ));
            }
            Stage::Writing {
                mac_addresses,
                sha256_hashes,
            } => {
                ui::header(&format!(
                    "Saving MAC address observables to: {}",
                    mac_addresses.display()
                ));
                ui::header(&format!(
                    "Saving SHA256 hash observables to: {}",
                    sha256_hashes.display()
                ));
            }
            Stage::Notifying => ui::header("Posting message to Webex Teams"),
        })
        .await;

    if let Some(spinner) = spinner.take() {
        spinner.finish_clear();
    }

    match result {
        Ok(report) => {
            ui::highlight(&format!(
                "Saved {} observables from {} events",
                report.observables.len(),
                report.events_received
            ));
            for observable in &report.observables {
                ui::info(&format!(
                    "{} ({}, {})",
                    observable.hostname, observable.ip_address, observable.mac_address
                ));
            }
            if !report.notified {
                ui::highlight("Skipped the Webex Teams notification");
            }
            ui::success("AMP Mission Completed!!!");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) if error.is_no_observables() => {
            tracing::debug!(%error, "mission ended without observables");
            ui::failure("No malware events found.");
            Ok(ExitCode::from(EXIT_NO_OBSERVABLES))
        }
        Err(error) => Err(error).context("AMP mission failed"),
    }
}
