//! Circuit score types.
//!
//! A [`RaceScore`] is one decoded race result: the points a constructor
//! earned at one circuit for one queried finishing position. A
//! [`CircuitScore`] is the running aggregate of all race scores seen for a
//! single circuit.

use serde::{Deserialize, Serialize};

// ============================================================================
// Race Score
// ============================================================================

/// Points earned at one circuit for one queried finishing position.
///
/// Decoded from a single race record of the upstream results endpoint. The
/// finishing position itself is not stored here; it is implied by which
/// per-position list the score belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceScore {
    /// Stable circuit identifier.
    pub circuit_id: String,
    /// Circuit display name.
    pub circuit_name: String,
    /// Country the circuit is located in.
    pub country: String,
    /// Points earned in this race at the queried position.
    pub points: f64,
}

// ============================================================================
// Circuit Score
// ============================================================================

/// Per-circuit aggregate over a constructor's scanned history.
///
/// `position_index` has one slot per scanned finishing position: index `p`
/// counts how many races contributed a result at position `p + 1`. The
/// vector length is fixed when the aggregate is created and never resized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitScore {
    /// Stable circuit identifier.
    pub circuit_id: String,
    /// Circuit display name.
    pub circuit_name: String,
    /// Country the circuit is located in.
    pub country: String,
    /// Total points accumulated across all scanned positions.
    pub total_points: f64,
    /// Occurrence count per scanned finishing position.
    pub position_index: Vec<u32>,
}

impl CircuitScore {
    /// Creates an aggregate from the first race score seen for a circuit.
    ///
    /// The positional vector is zero-filled to `positions` slots with a
    /// single occurrence recorded at `position_index` (0-based).
    pub fn from_first_score(score: &RaceScore, positions: usize, position_index: usize) -> Self {
        let mut index = vec![0; positions];
        index[position_index] = 1;
        Self {
            circuit_id: score.circuit_id.clone(),
            circuit_name: score.circuit_name.clone(),
            country: score.country.clone(),
            total_points: score.points,
            position_index: index,
        }
    }

    /// Folds another race score for this circuit into the aggregate.
    pub fn add_score(&mut self, score: &RaceScore, position_index: usize) {
        self.total_points += score.points;
        self.position_index[position_index] += 1;
    }
}
