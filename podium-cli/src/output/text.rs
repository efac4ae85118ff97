//! Text output formatting.

use podium_core::{Constructor, ReportEntry};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Row shown when a constructor has no best circuit.
const NO_CIRCUIT: &str = "None";

/// Width of the first report column.
const NAME_COLUMN_WIDTH: usize = 28;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the best-circuit report for a season.
    pub fn format_report(&self, season: u16, entries: &[ReportEntry]) -> String {
        let mut lines = Vec::with_capacity(entries.len() + 2);

        lines.push(self.bold(&format!(
            "Best historical circuit per constructor, {season} season"
        )));
        lines.push(self.dim(&format!(
            "{:<width$} {}",
            "Constructor",
            "Circuit",
            width = NAME_COLUMN_WIDTH
        )));

        for entry in entries {
            let circuit = match &entry.best_circuit {
                Some(best) => self.cyan(&best.circuit_name),
                None => self.dim(NO_CIRCUIT),
            };
            lines.push(format!(
                "{:<width$} {}",
                entry.constructor.name,
                circuit,
                width = NAME_COLUMN_WIDTH
            ));
        }

        lines.join("\n")
    }

    /// Formats the season roster.
    pub fn format_roster(&self, season: u16, roster: &[Constructor]) -> String {
        let mut lines = Vec::with_capacity(roster.len() + 1);

        lines.push(self.bold(&format!("Constructors, {season} season")));
        for constructor in roster {
            // Pad before coloring so ANSI codes don't skew the column.
            lines.push(format!(
                "{} {}",
                self.dim(&format!("{:<16}", constructor.id)),
                constructor.name
            ));
        }

        lines.join("\n")
    }

    // ------------------------------------------------------------------------
    // Color helpers
    // ------------------------------------------------------------------------

    fn bold(&self, s: &str) -> String {
        self.wrap(BOLD, s)
    }

    fn dim(&self, s: &str) -> String {
        self.wrap(DIM, s)
    }

    fn cyan(&self, s: &str) -> String {
        self.wrap(CYAN, s)
    }

    fn wrap(&self, code: &str, s: &str) -> String {
        if self.use_colors {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
