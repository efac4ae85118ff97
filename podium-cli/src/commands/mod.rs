//! CLI command implementations.

pub mod constructors;
pub mod report;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use podium_ergast::ErgastClient;
use podium_fetch::HttpClient;

use crate::Cli;

/// Builds the Ergast client from the CLI configuration.
pub(crate) fn build_client(cli: &Cli) -> Result<ErgastClient> {
    let http = HttpClient::with_timeout(cli.base_url.clone(), Duration::from_secs(cli.timeout))?;
    Ok(ErgastClient::new(Arc::new(http)))
}
