//! JSON output formatter for machine processing
//!
//! The report is serialized verbatim with two-space indentation, both for
//! `--output json` and for the `--save` file.

use crate::domain::Report;
use crate::error::AppError;
use crate::output::OutputFormatter;
use std::io::Write;
use std::path::Path;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = to_json(report).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

/// Serialize the report as indented JSON
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Write the report as indented JSON to `path`, replacing any existing file
pub fn save_report(report: &Report, path: &Path) -> Result<(), AppError> {
    let mut json = to_json(report)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangeType, EcosystemReport, EcosystemResult, UpdateRecord};
    use std::collections::BTreeMap;

    fn create_test_report() -> Report {
        let mut rust = EcosystemReport::new();
        rust.set_total_deps(2);
        rust.push_update(
            UpdateRecord::new("clap", "3.2.0", "4.5.0", ChangeType::Major).with_kind("Normal"),
        );

        let mut go = BTreeMap::new();
        go.insert(
            "bindings/go".to_string(),
            EcosystemResult::failed("Failed to run go list: Command timed out"),
        );

        Report::new("2026-01-01 12:00:00", "/repo", Some(rust.into()), go)
    }

    #[test]
    fn test_format_json() {
        let formatter = JsonFormatter::new();
        let report = create_test_report();
        let mut output = Vec::new();

        formatter.format(&report, &mut output).unwrap();
        let output_str = String::from_utf8(output).unwrap();

        // Verify it's valid JSON
        let parsed: serde_json::Value = serde_json::from_str(&output_str).unwrap();

        assert_eq!(parsed["timestamp"], "2026-01-01 12:00:00");
        assert_eq!(parsed["project_root"], "/repo");
        assert_eq!(parsed["rust"]["total_deps"], 2);
        assert_eq!(parsed["rust"]["outdated_count"], 1);
        assert_eq!(parsed["rust"]["updates"][0]["name"], "clap");
        assert_eq!(parsed["rust"]["updates"][0]["current"], "3.2.0");
        assert_eq!(parsed["rust"]["updates"][0]["latest"], "4.5.0");
        assert_eq!(parsed["rust"]["updates"][0]["change_type"], "major");
        assert_eq!(parsed["rust"]["updates"][0]["kind"], "Normal");
        assert_eq!(
            parsed["go_modules"]["bindings/go"],
            serde_json::json!({ "error": "Failed to run go list: Command timed out" })
        );
        assert_eq!(parsed["summary"]["total_updates"], 1);
        assert_eq!(parsed["summary"]["total_rust_updates"], 1);
        assert_eq!(parsed["summary"]["total_go_updates"], 0);
        assert_eq!(parsed["summary"]["has_major_updates"], true);
        assert_eq!(parsed["summary"]["has_security_updates"], false);
    }

    #[test]
    fn test_format_json_is_indented() {
        let output = to_json(&create_test_report()).unwrap();
        assert!(output.contains("\n  \"timestamp\""));
    }

    #[test]
    fn test_save_report_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("deps.json");
        std::fs::write(&path, "stale content that is not json").unwrap();

        save_report(&create_test_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["summary"]["total_updates"], 1);
    }

    #[test]
    fn test_save_report_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("deps.json");
        let err = save_report(&create_test_report(), &path).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
