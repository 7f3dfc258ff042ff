//! deps-analyze - Multi-ecosystem dependency freshness CLI tool
//!
//! This tool reports outdated dependencies for:
//! - Rust (Cargo.toml, via cargo-outdated)
//! - Go (go.mod, via go list)

use clap::Parser;
use deps_analyze::analyzer::{resolve_project_root, Analyzer};
use deps_analyze::cli::CliArgs;
use deps_analyze::logging;
use deps_analyze::output::{create_formatter, save_report, OutputConfig};
use deps_analyze::progress::Progress;
use deps_analyze::runner::SystemRunner;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose, args.use_color()) {
        eprintln!("Warning: {}", e);
    }
    if !args.use_color() {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let project_root = resolve_project_root(&args.project_root)?;

    if args.verbose {
        eprintln!("deps-analyze v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Project root: {}", project_root.display());
    }

    let mut analyzer = Analyzer::new(project_root, SystemRunner::new())
        .with_progress(Progress::new(args.show_progress()));
    let report = analyzer.generate_report().await;

    let formatter = create_formatter(OutputConfig::new(args.output, args.use_color()));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if let Some(path) = &args.save {
        save_report(&report, path)?;
        eprintln!("💾 Report saved to: {}", path.display());
    }

    // Any available update signals a non-clean state
    if report.summary.total_updates > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
