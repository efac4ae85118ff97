//! JSON output formatting.

use chrono::{DateTime, Utc};
use podium_core::{Constructor, ReportEntry};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON envelope for the best-circuit report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput<'a> {
    season: u16,
    generated_at: DateTime<Utc>,
    constructors: &'a [ReportEntry],
}

/// JSON envelope for the season roster.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RosterOutput<'a> {
    season: u16,
    generated_at: DateTime<Utc>,
    constructors: &'a [Constructor],
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter with optional pretty-printing.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats the best-circuit report for a season.
    pub fn format_report(
        &self,
        season: u16,
        entries: &[ReportEntry],
    ) -> Result<String, serde_json::Error> {
        self.serialize(&ReportOutput {
            season,
            generated_at: Utc::now(),
            constructors: entries,
        })
    }

    /// Formats the season roster.
    pub fn format_roster(
        &self,
        season: u16,
        roster: &[Constructor],
    ) -> Result<String, serde_json::Error> {
        self.serialize(&RosterOutput {
            season,
            generated_at: Utc::now(),
            constructors: roster,
        })
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}
