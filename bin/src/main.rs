//! hltv CLI - Scrape HLTV results, match statistics and round economy.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod display;

use args::{ClientArgs, ListArgs, OutputArgs, SearchTarget};
use commands::list::Dataset;

#[derive(Parser)]
#[command(name = "hltv")]
#[command(about = "Scrape HLTV results, match statistics and round economy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and warnings)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    client: ClientArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List results: one row per match
    Results(ListArgs),

    /// Match statistics: one row per played map
    Matches(ListArgs),

    /// Match statistics with thirty round economy slots per map
    Economy(ListArgs),

    /// Round economy: one row per played round
    Rounds(ListArgs),

    /// Statistics of a single match
    Match {
        /// Match identifier
        id: u64,

        /// Include the round economy of every map
        #[arg(long)]
        economy: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Look up team, player or event identifiers by name
    Search {
        /// What to search for
        #[arg(value_enum)]
        kind: SearchTarget,

        /// Name or part of a name
        term: String,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.client.config();
    match command {
        Commands::Results(args) => commands::list::list(Dataset::Results, &args, config, cli.quiet).await,
        Commands::Matches(args) => commands::list::list(Dataset::Matches, &args, config, cli.quiet).await,
        Commands::Economy(args) => commands::list::list(Dataset::Economy, &args, config, cli.quiet).await,
        Commands::Rounds(args) => commands::list::list(Dataset::Rounds, &args, config, cli.quiet).await,
        Commands::Match {
            id,
            economy,
            output,
        } => commands::single::single_match(id, economy, &output, config, cli.quiet).await,
        Commands::Search { kind, term } => commands::search::search(kind, &term, config).await,
    }
}
