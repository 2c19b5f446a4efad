#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use std::process::ExitCode;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod progress;
mod ui;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("amp-mission error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;

    match &cli.command {
        cli::Commands::Run(args) => commands::run::handle(args, &flags, &config).await,
        cli::Commands::Events(args) => commands::events::handle(args, &config).await,
        cli::Commands::Artifacts(args) => commands::artifacts::handle(args, &flags, &config),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AMP_MISSION_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
