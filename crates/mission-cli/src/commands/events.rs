use std::process::ExitCode;

use anyhow::Context;
use mission_amp::AmpClient;
use mission_config::MissionConfig;
use mission_core::malware_events;

use crate::cli::EventsArgs;
use crate::progress::Progress;
use crate::ui;

/// Handle `amp-mission events`: fetch recent events and count them.
pub async fn handle(args: &EventsArgs, config: &MissionConfig) -> anyhow::Result<ExitCode> {
    config.validate(false).context("invalid configuration")?;
    let client = AmpClient::new(&config.amp).context("failed to build AMP client")?;

    ui::header("Getting recent events from AMP");
    let spinner = Progress::spinner("waiting for AMP");
    let events = client.get_events(&args.filter.to_filter()).await;
    spinner.finish_clear();
    let events = events.context("failed to fetch events from AMP")?;

    ui::highlight(&format!("Received total {} events", events.len()));
    ui::highlight(&format!(
        "{} of them are malware events",
        malware_events(&events).count()
    ));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    }

    Ok(ExitCode::SUCCESS)
}
