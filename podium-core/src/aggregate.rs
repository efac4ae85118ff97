//! Circuit aggregation.
//!
//! Pure reducers over per-position race scores. The input is a slice of
//! per-position lists (index 0 = finishing position 1) as produced by the
//! result collector; the output maps circuit identifiers to their running
//! aggregates.

use std::collections::HashMap;

use crate::models::{CircuitScore, RaceScore};

/// Aggregates per-position race scores into per-circuit totals.
///
/// On first sight of a circuit identifier the aggregate is initialized from
/// that race's points with a zero-filled positional vector of length
/// `rounds.len()`; every later sight adds points and increments the counter
/// at the current position index. Pure function of its input: fresh
/// invocations over the same rounds yield structurally identical maps.
pub fn aggregate_circuits(rounds: &[Vec<RaceScore>]) -> HashMap<String, CircuitScore> {
    let positions = rounds.len();
    let mut circuits: HashMap<String, CircuitScore> = HashMap::new();

    for (position_index, races) in rounds.iter().enumerate() {
        for race in races {
            if let Some(aggregate) = circuits.get_mut(&race.circuit_id) {
                aggregate.add_score(race, position_index);
            } else {
                circuits.insert(
                    race.circuit_id.clone(),
                    CircuitScore::from_first_score(race, positions, position_index),
                );
            }
        }
    }

    circuits
}

/// Selects the circuit with the strictly greatest points total.
///
/// The threshold starts at zero and is only replaced by strictly greater
/// totals, so an empty map, or one where every total is zero or negative,
/// yields `None`. A zero-point circuit is deliberately not a "best" circuit.
/// Ties between equal maxima are not specially handled.
pub fn best_circuit(circuits: &HashMap<String, CircuitScore>) -> Option<CircuitScore> {
    let mut max_points = 0.0_f64;
    let mut best: Option<&CircuitScore> = None;

    for aggregate in circuits.values() {
        if aggregate.total_points > max_points {
            max_points = aggregate.total_points;
            best = Some(aggregate);
        }
    }

    best.cloned()
}
