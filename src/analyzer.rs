//! Report builder coordinating the probes
//!
//! This module provides:
//! - Project root resolution (fatal when missing)
//! - Discovery of the Cargo manifest and the known Go module directories
//! - Sequential probe execution in a fixed order
//! - Aggregation into a [`Report`]

use crate::domain::{Ecosystem, EcosystemResult, Report};
use crate::error::AppError;
use crate::probe::get_probe;
use crate::progress::Progress;
use crate::runner::CommandRunner;
use chrono::Local;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Go module directories probed when present, relative to the project root
pub const GO_MODULE_DIRS: &[&str] = &["bindings/go", "examples/goclient"];

/// Format of the report timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Resolve the project root to an absolute path, failing if it does not exist
pub fn resolve_project_root(path: &Path) -> Result<PathBuf, AppError> {
    let absolute = std::path::absolute(path).map_err(|e| AppError::io(path, e))?;
    if !absolute.exists() {
        return Err(AppError::project_root_not_found(absolute));
    }
    absolute.canonicalize().map_err(|e| AppError::io(&absolute, e))
}

/// Key a module directory as `parent-dir-name/dir-name`
pub fn module_key(dir: &Path) -> String {
    let name = |p: Option<&Path>| {
        p.and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    format!("{}/{}", name(dir.parent()), name(Some(dir)))
}

/// Builds the dependency report for one project
pub struct Analyzer<R: CommandRunner> {
    /// Absolute project root
    project_root: PathBuf,
    /// Runner used by every probe
    runner: R,
    /// Spinner shown while probes run
    progress: Progress,
}

impl<R: CommandRunner> Analyzer<R> {
    /// Create an analyzer for an already resolved project root
    pub fn new(project_root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            project_root: project_root.into(),
            runner,
            progress: Progress::disabled(),
        }
    }

    /// Show a spinner while probes run (builder pattern)
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the known Go module directories that exist, with their keys
    pub fn go_module_dirs(&self) -> Vec<(String, PathBuf)> {
        GO_MODULE_DIRS
            .iter()
            .map(|relative| self.project_root.join(relative))
            .filter(|dir| dir.exists())
            .map(|dir| (module_key(&dir), dir))
            .collect()
    }

    /// Run every applicable probe and build the report
    pub async fn generate_report(&mut self) -> Report {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.generate_report_at(timestamp).await
    }

    /// Same as [`Analyzer::generate_report`] with a caller-provided timestamp
    pub async fn generate_report_at(&mut self, timestamp: impl Into<String>) -> Report {
        info!(root = %self.project_root.display(), "analyzing dependencies");

        let rust = if self
            .project_root
            .join(Ecosystem::Rust.manifest_filename())
            .exists()
        {
            self.progress.spinner("🦀 Analyzing Rust dependencies...");
            Some(self.probe(Ecosystem::Rust, &self.project_root).await)
        } else {
            debug!("no Cargo.toml at project root, skipping cargo probe");
            None
        };

        let mut go_modules = BTreeMap::new();
        for (key, dir) in self.go_module_dirs() {
            self.progress
                .spinner(&format!("🐹 Analyzing Go dependencies in {}...", key));
            let result = self.probe(Ecosystem::Go, &dir).await;
            go_modules.insert(key, result);
        }

        self.progress.finish_and_clear();

        let report = Report::new(timestamp, self.project_root.clone(), rust, go_modules);
        info!(
            total_updates = report.summary.total_updates,
            major_updates = report.all_updates().filter(|u| u.is_major()).count(),
            "analysis finished"
        );
        report
    }

    async fn probe(&self, ecosystem: Ecosystem, dir: &Path) -> EcosystemResult {
        let result = get_probe(ecosystem).analyze(&self.runner, dir).await;
        if let Some(error) = result.error() {
            debug!(%ecosystem, dir = %dir.display(), error, "probe failed");
        }
        result
    }
}
