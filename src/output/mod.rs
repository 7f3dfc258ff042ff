//! Output formatting for dependency reports
//!
//! This module provides:
//! - Human-readable console output with severity markers
//! - JSON output for machine processing and the `--save` file

mod json;
mod text;

pub use json::{save_report, to_json, JsonFormatter};
pub use text::TextFormatter;

use crate::domain::Report;
use clap::ValueEnum;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON, the report verbatim
    Json,
    /// Human-readable console report
    #[default]
    Human,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (json, human)
    pub format: OutputFormat,
    /// Whether to use colors (human output only)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }
}

/// Trait for report formatters
pub trait OutputFormatter {
    /// Format and write the report
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Human => Box::new(TextFormatter::with_color(config.color)),
    }
}
