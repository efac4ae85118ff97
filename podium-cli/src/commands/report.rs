//! Report command - best historical circuit per constructor.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use futures::future::try_join_all;
use podium_core::ReportEntry;
use tracing::{info, warn};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Finishing positions scanned when none is given.
const DEFAULT_POSITIONS: u32 = 10;

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Number of finishing positions to scan (1..=N).
    #[arg(long, short = 'n', default_value_t = DEFAULT_POSITIONS)]
    pub positions: u32,

    /// Also write the rendered report to this file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            positions: DEFAULT_POSITIONS,
            output: None,
        }
    }
}

/// Runs the report command.
pub async fn run(args: &ReportArgs, cli: &Cli) -> Result<()> {
    let client = super::build_client(cli)?;

    info!(
        season = cli.season,
        positions = args.positions,
        "Generating best-circuit report"
    );

    let roster = client.constructors_for_season(cli.season).await?;
    if roster.is_empty() {
        warn!(season = cli.season, "Season has no constructors");
    }

    // One concurrent pipeline per constructor, joined fail-fast: a single
    // fetch failure aborts the whole report.
    let jobs = roster
        .iter()
        .map(|constructor| client.best_circuit_for_constructor(&constructor.id, args.positions));
    let best = try_join_all(jobs).await?;

    let entries: Vec<ReportEntry> = roster
        .into_iter()
        .zip(best)
        .map(|(constructor, best_circuit)| ReportEntry {
            constructor,
            best_circuit,
        })
        .collect();

    println!("{}", render(cli, &entries, !cli.no_color)?);

    if let Some(path) = &args.output {
        // Files never get ANSI colors.
        let body = render(cli, &entries, false)?;
        tokio::fs::write(path, body)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "Report written");
    }

    Ok(())
}

fn render(cli: &Cli, entries: &[ReportEntry], use_colors: bool) -> Result<String> {
    match cli.format {
        OutputFormat::Text => {
            Ok(TextFormatter::new(use_colors).format_report(cli.season, entries))
        }
        OutputFormat::Json => Ok(JsonFormatter::new(cli.pretty).format_report(cli.season, entries)?),
    }
}
