//! Ergast API client.
//!
//! Composes the fetch seam with the parsers: one call for the season
//! roster, one call per finishing position for a constructor's history, and
//! the aggregation pipeline that reduces a constructor's history to its
//! best circuit.

use std::sync::Arc;

use futures::future::try_join_all;
use podium_core::{aggregate_circuits, best_circuit, CircuitScore, Constructor, RaceScore};
use podium_fetch::{FetchError, JsonFetch};
use tracing::debug;

use crate::parser;

/// Ergast API base URL.
pub const ERGAST_API_BASE: &str = "https://ergast.com/api/f1";

/// Result-count cap for the per-position history endpoint.
///
/// Large enough to cover the full history of any constructor; the API
/// defaults to 30 records without it.
pub const RESULT_HISTORY_LIMIT: u32 = 400;

/// Client for the Ergast Formula 1 API.
pub struct ErgastClient {
    fetcher: Arc<dyn JsonFetch>,
}

impl ErgastClient {
    /// Creates a client over the given fetcher.
    pub fn new(fetcher: Arc<dyn JsonFetch>) -> Self {
        Self { fetcher }
    }

    /// Lists the constructors competing in a season, in API order.
    ///
    /// A season with no roster data yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the roster request itself fails.
    pub async fn constructors_for_season(
        &self,
        season: u16,
    ) -> Result<Vec<Constructor>, FetchError> {
        let value = self
            .fetcher
            .fetch_json(&format!("{season}/constructors.json"))
            .await?;
        parser::parse_roster(value)
    }

    /// Collects a constructor's full race history for each finishing
    /// position `1..=positions`.
    ///
    /// One request per position, issued concurrently and joined fail-fast:
    /// a single failed position aborts the whole collection. The output is
    /// indexed by position regardless of completion order (index 0 holds
    /// position 1), and a position with no recorded races holds an empty
    /// vector at its index.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] raised by any position request.
    pub async fn results_by_position(
        &self,
        constructor_id: &str,
        positions: u32,
    ) -> Result<Vec<Vec<RaceScore>>, FetchError> {
        debug!(constructor = constructor_id, positions, "Collecting results");

        let requests = (1..=positions).map(|position| {
            let path = format!(
                "constructors/{constructor_id}/results/{position}.json?limit={RESULT_HISTORY_LIMIT}"
            );
            async move {
                let value = self.fetcher.fetch_json(&path).await?;
                parser::parse_position_races(value)
            }
        });

        try_join_all(requests).await
    }

    /// Finds the circuit a constructor has accumulated the most points at,
    /// scanning finishing positions `1..=positions`.
    ///
    /// Returns `None` when no circuit has a strictly positive total.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when any position request fails.
    pub async fn best_circuit_for_constructor(
        &self,
        constructor_id: &str,
        positions: u32,
    ) -> Result<Option<CircuitScore>, FetchError> {
        let rounds = self.results_by_position(constructor_id, positions).await?;
        let circuits = aggregate_circuits(&rounds);
        debug!(
            constructor = constructor_id,
            circuits = circuits.len(),
            "Aggregated circuit history"
        );
        Ok(best_circuit(&circuits))
    }
}
