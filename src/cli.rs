//! CLI argument parsing module for deps-analyze

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Multi-ecosystem dependency freshness report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "deps-analyze",
    version,
    about = "Analyze project dependencies across Cargo and Go modules"
)]
pub struct CliArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Also save the JSON report to FILE (always JSON, overwritten)
    #[arg(short, long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Project root directory (default: current directory)
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color
    }

    /// Check if the spinner should be shown
    pub fn show_progress(&self) -> bool {
        self.output == OutputFormat::Human
    }
}
