//! CLI output formatting tests.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use podium_core::{CircuitScore, Constructor, ReportEntry};

    fn entries() -> Vec<ReportEntry> {
        vec![
            ReportEntry {
                constructor: Constructor::new("ferrari", "Ferrari"),
                best_circuit: Some(CircuitScore {
                    circuit_id: "monza".to_string(),
                    circuit_name: "Autodromo Nazionale di Monza".to_string(),
                    country: "Italy".to_string(),
                    total_points: 25.0,
                    position_index: vec![1, 0],
                }),
            },
            ReportEntry {
                constructor: Constructor::new("hrt", "HRT"),
                best_circuit: None,
            },
        ]
    }

    #[test]
    fn test_report_has_two_columns() {
        let formatter = TextFormatter::new(false);
        let report = formatter.format_report(2023, &entries());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("2023 season"));
        assert!(lines[1].starts_with("Constructor"));
        assert!(lines[2].starts_with("Ferrari"));
        assert!(lines[2].contains("Autodromo Nazionale di Monza"));
    }

    #[test]
    fn test_report_placeholder_when_no_best_circuit() {
        let formatter = TextFormatter::new(false);
        let report = formatter.format_report(2023, &entries());
        let row = report.lines().last().unwrap();

        assert!(row.starts_with("HRT"));
        assert!(row.ends_with("None"));
    }

    #[test]
    fn test_report_without_colors_has_no_escapes() {
        let formatter = TextFormatter::new(false);
        let report = formatter.format_report(2023, &entries());
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_report_with_colors() {
        let formatter = TextFormatter::new(true);
        let report = formatter.format_report(2023, &entries());
        assert!(report.contains("\x1b[1m"), "header should be bold");
        assert!(report.contains("\x1b[0m"));
    }

    #[test]
    fn test_roster_lists_ids_and_names() {
        let formatter = TextFormatter::new(false);
        let roster = vec![
            Constructor::new("ferrari", "Ferrari"),
            Constructor::new("red_bull", "Red Bull"),
        ];
        let rendered = formatter.format_roster(2023, &roster);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("ferrari"));
        assert!(lines[1].ends_with("Ferrari"));
        assert!(lines[2].starts_with("red_bull"));
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use podium_core::{CircuitScore, Constructor, ReportEntry};
    use serde_json::Value;

    fn entry() -> ReportEntry {
        ReportEntry {
            constructor: Constructor::new("ferrari", "Ferrari"),
            best_circuit: Some(CircuitScore {
                circuit_id: "monza".to_string(),
                circuit_name: "Monza".to_string(),
                country: "Italy".to_string(),
                total_points: 43.0,
                position_index: vec![1, 1],
            }),
        }
    }

    #[test]
    fn test_report_shape() {
        let formatter = JsonFormatter::new(false);
        let rendered = formatter.format_report(2023, &[entry()]).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["season"], 2023);
        assert!(value["generatedAt"].is_string());
        let best = &value["constructors"][0]["bestCircuit"];
        assert_eq!(best["circuitId"], "monza");
        assert_eq!(best["totalPoints"], 43.0);
        assert_eq!(best["positionIndex"], serde_json::json!([1, 1]));
    }

    #[test]
    fn test_report_null_best_circuit() {
        let formatter = JsonFormatter::new(false);
        let entry = ReportEntry {
            constructor: Constructor::new("hrt", "HRT"),
            best_circuit: None,
        };
        let rendered = formatter.format_report(2023, &[entry]).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert!(value["constructors"][0]["bestCircuit"].is_null());
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let formatter = JsonFormatter::new(true);
        let rendered = formatter.format_report(2023, &[entry()]).unwrap();
        assert!(rendered.contains("\n  "));
    }

    #[test]
    fn test_roster_shape() {
        let formatter = JsonFormatter::new(false);
        let roster = vec![Constructor::new("ferrari", "Ferrari")];
        let rendered = formatter.format_roster(2023, &roster).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["constructors"][0]["id"], "ferrari");
        assert_eq!(value["constructors"][0]["name"], "Ferrari");
    }
}
