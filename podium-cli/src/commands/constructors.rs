//! Constructors command - list the season roster.

use anyhow::Result;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the constructors command.
pub async fn run(cli: &Cli) -> Result<()> {
    let client = super::build_client(cli)?;

    info!(season = cli.season, "Listing constructors");
    let roster = client.constructors_for_season(cli.season).await?;

    let rendered = match cli.format {
        OutputFormat::Text => {
            TextFormatter::new(!cli.no_color).format_roster(cli.season, &roster)
        }
        OutputFormat::Json => JsonFormatter::new(cli.pretty).format_roster(cli.season, &roster)?,
    };
    println!("{rendered}");

    Ok(())
}
