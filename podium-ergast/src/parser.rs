//! Ergast response parsers.
//!
//! Decode the `MRData` envelope into `podium-core` domain types. Absent or
//! null nested tables degrade to empty collections; a body that fails to
//! decode as the envelope at all is a fetch-layer error.

use podium_core::{Constructor, RaceScore};
use podium_fetch::FetchError;
use serde_json::Value;
use tracing::warn;

use crate::api::ErgastResponse;

/// Extracts the season roster from a roster-endpoint response.
///
/// An absent or null constructor list yields an empty roster. Order follows
/// the API response.
///
/// # Errors
///
/// Returns [`FetchError`] when the body does not decode as an Ergast
/// envelope.
pub fn parse_roster(value: Value) -> Result<Vec<Constructor>, FetchError> {
    let envelope: ErgastResponse = serde_json::from_value(value)?;
    let entries = envelope
        .mr_data
        .and_then(|data| data.constructor_table)
        .and_then(|table| table.constructors)
        .unwrap_or_default();

    Ok(entries
        .into_iter()
        .map(|entry| Constructor::new(entry.constructor_id, entry.name))
        .collect())
}

/// Extracts race scores from a position-filtered results response.
///
/// An absent or null race list yields an empty vector. Races without a
/// result entry carry no score for the queried position and are dropped.
///
/// # Errors
///
/// Returns [`FetchError`] when the body does not decode as an Ergast
/// envelope.
pub fn parse_position_races(value: Value) -> Result<Vec<RaceScore>, FetchError> {
    let envelope: ErgastResponse = serde_json::from_value(value)?;
    let races = envelope
        .mr_data
        .and_then(|data| data.race_table)
        .and_then(|table| table.races)
        .unwrap_or_default();

    let mut scores = Vec::with_capacity(races.len());
    for race in races {
        let Some(entry) = race.results.first() else {
            warn!(circuit = %race.circuit.circuit_id, "Race without result entry, skipping");
            continue;
        };
        let points = entry.points.as_deref().map_or(0.0, parse_points);

        let circuit = race.circuit;
        scores.push(RaceScore {
            circuit_id: circuit.circuit_id,
            circuit_name: circuit.circuit_name,
            country: circuit
                .location
                .and_then(|location| location.country)
                .unwrap_or_default(),
            points,
        });
    }

    Ok(scores)
}

/// Parses the string-encoded points field.
///
/// Non-numeric values count as zero; the upstream encoding is loose enough
/// that failing the whole run over one malformed field is not worth it.
fn parse_points(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(points) => points,
        Err(_) => {
            warn!(value = raw, "Non-numeric points value, counting as zero");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_roster_two_constructors() {
        let value = json!({
            "MRData": {
                "ConstructorTable": {
                    "Constructors": [
                        { "constructorId": "1", "name": "Constructor A" },
                        { "constructorId": "2", "name": "Constructor B" }
                    ]
                }
            }
        });

        let roster = parse_roster(value).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], Constructor::new("1", "Constructor A"));
        assert_eq!(roster[1], Constructor::new("2", "Constructor B"));
    }

    #[test]
    fn test_parse_roster_null_list_is_empty() {
        let value = json!({
            "MRData": {
                "ConstructorTable": { "Constructors": null }
            }
        });

        assert!(parse_roster(value).unwrap().is_empty());
    }

    #[test]
    fn test_parse_roster_missing_table_is_empty() {
        let value = json!({ "MRData": {} });
        assert!(parse_roster(value).unwrap().is_empty());
    }

    #[test]
    fn test_parse_roster_rejects_malformed_envelope() {
        let value = json!({
            "MRData": {
                "ConstructorTable": { "Constructors": "not a list" }
            }
        });

        assert!(parse_roster(value).is_err());
    }

    #[test]
    fn test_parse_races_extracts_circuit_and_points() {
        let value = json!({
            "MRData": {
                "RaceTable": {
                    "Races": [
                        {
                            "Circuit": {
                                "circuitId": "monza",
                                "circuitName": "Autodromo Nazionale di Monza",
                                "Location": { "country": "Italy" }
                            },
                            "Results": [ { "points": "25" } ]
                        }
                    ]
                }
            }
        });

        let scores = parse_position_races(value).unwrap();

        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].circuit_id, "monza");
        assert_eq!(scores[0].country, "Italy");
        assert_eq!(scores[0].points, 25.0);
    }

    #[test]
    fn test_parse_races_missing_list_is_empty() {
        let value = json!({ "MRData": { "RaceTable": {} } });
        assert!(parse_position_races(value).unwrap().is_empty());
    }

    #[test]
    fn test_parse_races_skips_race_without_result_entry() {
        let value = json!({
            "MRData": {
                "RaceTable": {
                    "Races": [
                        {
                            "Circuit": { "circuitId": "spa", "circuitName": "Spa" },
                            "Results": []
                        }
                    ]
                }
            }
        });

        assert!(parse_position_races(value).unwrap().is_empty());
    }

    #[test]
    fn test_parse_races_non_numeric_points_count_as_zero() {
        let value = json!({
            "MRData": {
                "RaceTable": {
                    "Races": [
                        {
                            "Circuit": { "circuitId": "spa", "circuitName": "Spa" },
                            "Results": [ { "points": "DNF" } ]
                        }
                    ]
                }
            }
        });

        let scores = parse_position_races(value).unwrap();
        assert_eq!(scores[0].points, 0.0);
    }

    #[test]
    fn test_parse_races_missing_location_defaults_country() {
        let value = json!({
            "MRData": {
                "RaceTable": {
                    "Races": [
                        {
                            "Circuit": { "circuitId": "spa", "circuitName": "Spa" },
                            "Results": [ { "points": "18" } ]
                        }
                    ]
                }
            }
        });

        let scores = parse_position_races(value).unwrap();
        assert_eq!(scores[0].country, "");
    }
}
