use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mission_core::EventFilter;

pub mod global;

pub use global::{ColorMode, GlobalFlags};

/// Top-level CLI parser for the `amp-mission` binary.
#[derive(Debug, Parser)]
#[command(
    name = "amp-mission",
    version,
    about = "Zero-day workflow: extract malware observables from AMP and notify the team"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root; artifact paths and `.env` are resolved against it
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to ./amp-mission.toml under the root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full mission: fetch, extract, save, notify
    Run(RunArgs),
    /// Fetch recent AMP events and report how many were received
    Events(EventsArgs),
    /// Print the observables saved by the last run
    Artifacts(ArtifactsArgs),
}

/// Server-side filters passed through to the AMP events query.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only request events of this type id (repeatable)
    #[arg(long = "event-type", value_name = "ID")]
    pub event_types: Vec<u64>,

    /// Only request malware detections
    #[arg(long, conflicts_with = "event_types")]
    pub malware_only: bool,

    /// Maximum number of events to request
    #[arg(long)]
    pub limit: Option<u32>,
}

impl FilterArgs {
    #[must_use]
    pub fn to_filter(&self) -> EventFilter {
        let mut filter = if self.malware_only {
            EventFilter::malware()
        } else {
            EventFilter {
                event_types: self.event_types.clone(),
                limit: None,
            }
        };
        filter.limit = self.limit;
        filter
    }
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Do not post the completion message to Webex Teams
    #[arg(long)]
    pub skip_notify: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EventsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print the events as JSON after the summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ArtifactsArgs {
    /// Print both lists as a single JSON object
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            root: self.root.clone(),
            config: self.config.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use mission_core::MALWARE_EVENT_TYPE_ID;
    use pretty_assertions::assert_eq;

    use super::{Cli, ColorMode, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_filters_and_skip_notify() {
        let cli = Cli::try_parse_from([
            "amp-mission",
            "run",
            "--event-type",
            "1107296272",
            "--limit",
            "100",
            "--skip-notify",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.skip_notify);
        let filter = args.filter.to_filter();
        assert_eq!(filter.event_types, vec![MALWARE_EVENT_TYPE_ID]);
        assert_eq!(filter.limit, Some(100));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "amp-mission",
            "events",
            "--root",
            "/srv/lab",
            "--color",
            "never",
            "-v",
        ])
        .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.root.as_deref(), Some(std::path::Path::new("/srv/lab")));
        assert_eq!(flags.color, ColorMode::Never);
        assert!(flags.verbose);
        assert!(matches!(cli.command, Commands::Events(_)));
    }

    #[test]
    fn default_run_has_empty_filter() {
        let cli = Cli::try_parse_from(["amp-mission", "run"]).expect("cli should parse");
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.filter.to_filter().is_empty());
        assert!(!args.skip_notify);
    }

    #[test]
    fn malware_only_requests_the_malware_type() {
        let cli = Cli::try_parse_from(["amp-mission", "events", "--malware-only", "--limit", "5"])
            .expect("cli should parse");
        let Commands::Events(args) = cli.command else {
            panic!("expected events command");
        };
        let filter = args.filter.to_filter();
        assert_eq!(filter.event_types, vec![MALWARE_EVENT_TYPE_ID]);
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn malware_only_conflicts_with_event_type() {
        let result = Cli::try_parse_from([
            "amp-mission",
            "run",
            "--malware-only",
            "--event-type",
            "553648130",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["amp-mission"]).is_err());
    }
}
