//! Clap argument definitions for the `spacebio` CLI.

use std::{env, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use spacebio_config::DataSource;
use spacebio_index::{InsightFilter, StatsView};

/// Parses a data source name.
fn parse_data_source(s: &str) -> Result<DataSource, String> {
    s.parse()
}

/// Parses a statistics view name.
fn parse_view(s: &str) -> Result<StatsView, String> {
    s.parse()
}

/// Parses an insight kind filter.
fn parse_insight_filter(s: &str) -> Result<InsightFilter, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "spacebio")]
#[command(about = "Search and analyze NASA bioscience publications")]
pub struct Cli {
    /// Corpus source: auto, filesystem, embedded or fallback
    #[arg(
        long,
        global = true,
        env = "SPACEBIO_DATA_SOURCE",
        value_parser = parse_data_source
    )]
    pub data_source: Option<DataSource>,

    /// Log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output flag.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output the JSON response envelope
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `spacebio search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query terms
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Maximum articles to return [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only articles tagged with this exact category
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio publications`.
#[derive(Args, Debug, Clone)]
pub struct PublicationsCommand {
    /// Query terms; omit to list publications in corpus order
    pub queries: Vec<String>,

    /// Maximum publications to return [default: 1000]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Article id
    pub id: u32,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    /// View: overview, keywords, categories, trends or full
    #[arg(long, default_value = "overview", value_parser = parse_view)]
    pub view: StatsView,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio insights`.
#[derive(Args, Debug, Clone)]
pub struct InsightsCommand {
    /// Kind: all, trend, gap, recommendation or prediction
    #[arg(short = 'k', long, default_value = "all", value_parser = parse_insight_filter)]
    pub kind: InsightFilter,

    /// Maximum insights to return [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio shell`.
#[derive(Args, Debug, Clone)]
pub struct ShellCommand {
    /// Maximum articles per query [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `spacebio init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.spacebio.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `spacebio` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank articles against a query
    #[command(after_help = "\
SCORING:
  Each whitespace-separated term is counted literally and case-insensitively:
  title occurrences x10, abstract occurrences x5, matching keywords x8.
  Ties keep corpus order. Articles that match nothing are not listed.

EXAMPLES:
  spacebio search microgravity bone
  spacebio search radiation -c 'Radiation Biology'
  spacebio search 'stem cell' -n 5 --json")]
    Search(SearchCommand),

    /// Rank enriched publications against a query
    Publications(PublicationsCommand),

    /// Show one article by id
    Get(GetCommand),

    /// Show corpus statistics
    Stats(StatsCommand),

    /// Show rule-based research insights
    Insights(InsightsCommand),

    /// Read queries from stdin, one per line, against one cached corpus
    Shell(ShellCommand),

    /// Initialize spacebio configuration in current directory
    Init(InitCommand),

    /// Validate configuration and data availability
    Check,

    /// Show configuration, data source and cache status
    Status,

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints help listing every subcommand on one line.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: spacebio [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:13} {about}");
    }
    println!(
        "  {:<13} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("      --data-source <SOURCE>  auto, filesystem, embedded or fallback [env: SPACEBIO_DATA_SOURCE]");
    println!("  -v, --verbose...            Log verbosity (-v for info, -vv for debug)");
    println!("  -h, --help                  Print help");
}

#[cfg(test)]
mod tests {
    use spacebio_config::SearchSettings;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Help text defaults must track the configuration defaults.
    #[test]
    fn test_help_defaults_match_settings() {
        let cmd = Cli::command();
        let defaults = SearchSettings::default();

        for (subcmd, expected) in [
            ("search", defaults.limit),
            ("shell", defaults.limit),
            ("publications", defaults.publications_limit),
            ("insights", defaults.insights_limit),
        ] {
            let help = get_arg_help(&cmd, subcmd, "limit");
            assert!(
                help.contains(&format!("[default: {expected}]")),
                "{subcmd} --limit help should contain default {expected}: {help}"
            );
        }
    }

    #[test]
    fn test_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "spacebio",
            "stats",
            "--view",
            "keywords",
            "--data-source",
            "embedded",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.data_source, Some(DataSource::Embedded));
        assert_eq!(cli.verbose, 2);
        let Commands::Stats(stats) = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(stats.view, StatsView::Keywords);
    }

    #[test]
    fn test_rejects_unknown_view() {
        assert!(Cli::try_parse_from(["spacebio", "stats", "--view", "weekly"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
