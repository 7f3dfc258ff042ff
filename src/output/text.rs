//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A report banner with timestamp, project name and update total
//! - One section per ecosystem result, with severity markers per update
//! - Follow-up hints for updating dependencies

use crate::domain::{Ecosystem, EcosystemResult, Report, UpdateRecord};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn format_header(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let title = "📊 DEPENDENCY ANALYSIS REPORT";
        let summary = &report.summary;

        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", banner.dimmed())?;
            writeln!(writer, "{}", title.bold())?;
            writeln!(writer, "{}", banner.dimmed())?;
        } else {
            writeln!(writer, "{}", banner)?;
            writeln!(writer, "{}", title)?;
            writeln!(writer, "{}", banner)?;
        }

        writeln!(writer, "📅 Generated: {}", report.timestamp)?;
        writeln!(writer, "📁 Project: {}", report.project_name())?;
        if self.color {
            writeln!(
                writer,
                "🔄 Total Updates Available: {}",
                summary.total_updates.to_string().bold()
            )?;
        } else {
            writeln!(writer, "🔄 Total Updates Available: {}", summary.total_updates)?;
        }

        if summary.has_major_updates {
            let warning = "⚠️  Major version updates detected!";
            if self.color {
                writeln!(writer, "{}", warning.yellow().bold())?;
            } else {
                writeln!(writer, "{}", warning)?;
            }
        }

        writeln!(writer)
    }

    /// Format a single update line
    fn format_update_line(
        &self,
        update: &UpdateRecord,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let icon = update.change_type.icon();
        if self.color {
            writeln!(
                writer,
                "  {} {}: {} {} {}",
                icon,
                update.name,
                update.current.dimmed(),
                "→".dimmed(),
                update.latest.bright_white().bold()
            )
        } else {
            writeln!(
                writer,
                "  {} {}: {} → {}",
                icon, update.name, update.current, update.latest
            )
        }
    }

    fn format_section(
        &self,
        heading: &str,
        result: &EcosystemResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let count = result.outdated_count();
        if self.color {
            writeln!(writer, "{} ({} updates)", heading.bold(), count)?;
            writeln!(writer, "{}", "-".repeat(RULE_WIDTH).dimmed())?;
        } else {
            writeln!(writer, "{} ({} updates)", heading, count)?;
            writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        }

        if let Some(error) = result.error() {
            if self.color {
                writeln!(writer, "❌ Error: {}", error.red())?;
            } else {
                writeln!(writer, "❌ Error: {}", error)?;
            }
        } else if result.updates().is_empty() {
            writeln!(writer, "  ✅ All dependencies up to date")?;
        } else {
            for update in result.updates() {
                self.format_update_line(update, writer)?;
            }
        }

        writeln!(writer)
    }

    fn format_hints(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "💡 Run 'just deps-update' to update dependencies")?;
        writeln!(writer, "💡 Run 'just deps-check' for a dry-run")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        self.format_header(report, writer)?;

        if let Some(rust) = &report.rust {
            let rust_eco = Ecosystem::Rust;
            let heading = format!("{} {} Dependencies", rust_eco.icon(), rust_eco);
            self.format_section(&heading, rust, writer)?;
        }

        for (module, result) in &report.go_modules {
            let go_eco = Ecosystem::Go;
            let heading = format!("{} {} Module: {}", go_eco.icon(), go_eco, module);
            self.format_section(&heading, result, writer)?;
        }

        self.format_hints(writer)
    }
}
