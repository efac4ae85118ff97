//! Report entry types.

use serde::{Deserialize, Serialize};

use super::{CircuitScore, Constructor};

/// One row of the season report: a constructor and its best circuit.
///
/// `best_circuit` is `None` when the constructor has no circuit with a
/// strictly positive points total across the scanned positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// The constructor this row describes.
    pub constructor: Constructor,
    /// Best-performing circuit, if one exists.
    pub best_circuit: Option<CircuitScore>,
}
