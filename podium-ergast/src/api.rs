//! Ergast wire-format response types.
//!
//! Every nested container is optional: the upstream API omits or nulls
//! tables it has no data for, and the report contract treats that as benign
//! absence, never as an error. The decoding step is the only place that
//! distinction is made; parsers in [`crate::parser`] turn absence into
//! empty collections.

use serde::Deserialize;

// ============================================================================
// Envelope
// ============================================================================

/// Top-level Ergast response envelope.
#[derive(Debug, Deserialize)]
pub struct ErgastResponse {
    /// The `MRData` payload wrapper.
    #[serde(rename = "MRData", default)]
    pub mr_data: Option<MrData>,
}

/// The `MRData` payload: at most one table per response kind.
#[derive(Debug, Default, Deserialize)]
pub struct MrData {
    /// Constructor roster table (roster endpoint).
    #[serde(rename = "ConstructorTable", default)]
    pub constructor_table: Option<ConstructorTable>,

    /// Race results table (results endpoint).
    #[serde(rename = "RaceTable", default)]
    pub race_table: Option<RaceTable>,
}

// ============================================================================
// Roster Endpoint
// ============================================================================

/// Constructor table from the season roster endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ConstructorTable {
    /// Listed constructors; absent or null when the season has none.
    #[serde(rename = "Constructors", default)]
    pub constructors: Option<Vec<ConstructorEntry>>,
}

/// One constructor as listed by the roster endpoint.
#[derive(Debug, Deserialize)]
pub struct ConstructorEntry {
    /// Stable constructor identifier.
    #[serde(rename = "constructorId")]
    pub constructor_id: String,

    /// Display name.
    pub name: String,
}

// ============================================================================
// Results Endpoint
// ============================================================================

/// Race table from the position-filtered results endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RaceTable {
    /// Races matching the filter; absent or null when there are none.
    #[serde(rename = "Races", default)]
    pub races: Option<Vec<Race>>,
}

/// One race record.
#[derive(Debug, Deserialize)]
pub struct Race {
    /// The circuit the race was held at.
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,

    /// Result entries for the queried finishing position. The endpoint
    /// returns a singleton list; only the first entry carries the score.
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultEntry>,
}

/// Circuit descriptor inside a race record.
#[derive(Debug, Deserialize)]
pub struct Circuit {
    /// Stable circuit identifier.
    #[serde(rename = "circuitId")]
    pub circuit_id: String,

    /// Circuit display name.
    #[serde(rename = "circuitName")]
    pub circuit_name: String,

    /// Location descriptor.
    #[serde(rename = "Location", default)]
    pub location: Option<Location>,
}

/// Circuit location descriptor.
#[derive(Debug, Default, Deserialize)]
pub struct Location {
    /// Country the circuit is located in.
    #[serde(default)]
    pub country: Option<String>,
}

/// One result entry inside a race record.
#[derive(Debug, Deserialize)]
pub struct ResultEntry {
    /// Points earned, encoded by the API as a numeric string.
    #[serde(default)]
    pub points: Option<String>,
}
