// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Podium CLI - historical best-circuit reports for Formula 1 constructors.
//!
//! # Examples
//!
//! ```bash
//! # Best circuit per constructor, 2023 season, positions 1-10
//! podium
//!
//! # Another season, scanning the podium positions only
//! podium report --season 2012 --positions 3
//!
//! # JSON output
//! podium report --format json --pretty
//!
//! # Write the report to a file as well
//! podium report --output answer.txt
//!
//! # List the season roster
//! podium constructors --season 2023
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use podium_ergast::ERGAST_API_BASE;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{constructors, report};

/// Season queried when none is given.
const DEFAULT_SEASON: u16 = 2023;

/// Request timeout in seconds when none is given.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// CLI Definition
// ============================================================================

/// Podium CLI - best historical circuit per Formula 1 constructor.
#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Historical best-circuit reports for Formula 1 constructors")]
#[command(long_about = r#"
Podium answers one question: for each constructor competing in a season,
at which circuit has that constructor accumulated the most points across
finishing positions, over its entire history?

Data comes from the Ergast Formula 1 API.

Examples:
  podium                          # 2023 season, positions 1-10
  podium report --season 2012     # another season
  podium report --positions 3     # podium finishes only
  podium report --format json     # JSON output
  podium constructors             # list the season roster
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'report' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Season (year) to report on.
    #[arg(long, short, default_value_t = DEFAULT_SEASON, global = true)]
    pub season: u16,

    /// Ergast API base URL.
    #[arg(long, default_value = ERGAST_API_BASE, global = true)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Best historical circuit per constructor (default if no command specified).
    #[command(visible_alias = "r")]
    Report(report::ReportArgs),

    /// List the constructors competing in the season.
    #[command(visible_alias = "c")]
    Constructors,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Report(args)) => report::run(args, &cli).await,
        Some(Commands::Constructors) => constructors::run(&cli).await,
        None => {
            // Default to the report command
            report::run(&report::ReportArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }

    Ok(())
}
