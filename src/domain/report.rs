//! Report types
//!
//! Per-ecosystem results and the aggregated report produced by one run.

use super::UpdateRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Outcome of a probe that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EcosystemReport {
    /// Module directory (Go modules only)
    #[serde(skip_serializing_if = "Option::is_none")]
    module_path: Option<PathBuf>,
    /// Number of dependencies the tool reported
    total_deps: usize,
    /// Number of dependencies with a newer version, always `updates.len()`
    outdated_count: usize,
    /// Available updates in tool output order
    updates: Vec<UpdateRecord>,
}

impl EcosystemReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty report for a module directory
    pub fn for_module(path: impl Into<PathBuf>) -> Self {
        Self {
            module_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the number of dependencies seen in the tool output
    pub fn set_total_deps(&mut self, total: usize) {
        self.total_deps = total;
    }

    /// Records an available update
    pub fn push_update(&mut self, update: UpdateRecord) {
        self.updates.push(update);
        self.outdated_count = self.updates.len();
    }

    pub fn module_path(&self) -> Option<&PathBuf> {
        self.module_path.as_ref()
    }

    pub fn total_deps(&self) -> usize {
        self.total_deps
    }

    pub fn outdated_count(&self) -> usize {
        self.outdated_count
    }

    pub fn updates(&self) -> &[UpdateRecord] {
        &self.updates
    }
}

/// Result of probing one ecosystem (or one module of it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EcosystemResult {
    /// The probe could not produce data; serialized as `{"error": "..."}`
    Failed {
        /// Human-readable failure description
        error: String,
    },
    /// The probe ran and parsed the tool output
    Analyzed(EcosystemReport),
}

impl EcosystemResult {
    /// Creates a Failed result
    pub fn failed(error: impl Into<String>) -> Self {
        EcosystemResult::Failed {
            error: error.into(),
        }
    }

    /// Returns the error message, if the probe failed
    pub fn error(&self) -> Option<&str> {
        match self {
            EcosystemResult::Failed { error } => Some(error),
            EcosystemResult::Analyzed(_) => None,
        }
    }

    /// Returns the number of available updates (zero for failed probes)
    pub fn outdated_count(&self) -> usize {
        match self {
            EcosystemResult::Failed { .. } => 0,
            EcosystemResult::Analyzed(report) => report.outdated_count(),
        }
    }

    /// Returns the available updates (empty for failed probes)
    pub fn updates(&self) -> &[UpdateRecord] {
        match self {
            EcosystemResult::Failed { .. } => &[],
            EcosystemResult::Analyzed(report) => report.updates(),
        }
    }

    /// Returns true if any update is a major version change
    pub fn has_major_updates(&self) -> bool {
        self.updates().iter().any(UpdateRecord::is_major)
    }
}

impl From<EcosystemReport> for EcosystemResult {
    fn from(report: EcosystemReport) -> Self {
        EcosystemResult::Analyzed(report)
    }
}

/// Aggregated counters over every probe result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Updates reported by the cargo probe
    pub total_rust_updates: usize,
    /// Updates reported across all Go modules
    pub total_go_updates: usize,
    /// Sum of the two counters above
    pub total_updates: usize,
    /// True iff any update anywhere is a major change
    pub has_major_updates: bool,
    /// Always false until an advisory database is integrated
    pub has_security_updates: bool,
}

impl Summary {
    /// Computes the summary from the probe results
    pub fn from_results(
        rust: Option<&EcosystemResult>,
        go_modules: &BTreeMap<String, EcosystemResult>,
    ) -> Self {
        let total_rust_updates = rust.map_or(0, EcosystemResult::outdated_count);
        let total_go_updates = go_modules
            .values()
            .map(EcosystemResult::outdated_count)
            .sum();
        let has_major_updates = rust.is_some_and(EcosystemResult::has_major_updates)
            || go_modules.values().any(EcosystemResult::has_major_updates);

        Self {
            total_rust_updates,
            total_go_updates,
            total_updates: total_rust_updates + total_go_updates,
            has_major_updates,
            has_security_updates: false,
        }
    }
}

/// Dependency report for one project, built once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Local time the report was generated (`%Y-%m-%d %H:%M:%S`)
    pub timestamp: String,
    /// Absolute project root that was analyzed
    pub project_root: PathBuf,
    /// Cargo probe result; `{}` when the root has no Cargo.toml
    #[serde(serialize_with = "empty_object_when_absent")]
    pub rust: Option<EcosystemResult>,
    /// Go probe results keyed by `parent/dir`
    pub go_modules: BTreeMap<String, EcosystemResult>,
    /// Aggregated counters
    pub summary: Summary,
}

impl Report {
    /// Creates a report and computes its summary
    pub fn new(
        timestamp: impl Into<String>,
        project_root: impl Into<PathBuf>,
        rust: Option<EcosystemResult>,
        go_modules: BTreeMap<String, EcosystemResult>,
    ) -> Self {
        let summary = Summary::from_results(rust.as_ref(), &go_modules);
        Self {
            timestamp: timestamp.into(),
            project_root: project_root.into(),
            rust,
            go_modules,
            summary,
        }
    }

    /// Returns every update across all ecosystems
    pub fn all_updates(&self) -> impl Iterator<Item = &UpdateRecord> {
        self.rust
            .iter()
            .chain(self.go_modules.values())
            .flat_map(|result| result.updates().iter())
    }

    /// Returns the name of the project directory
    pub fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.project_root.display().to_string())
    }
}

fn empty_object_when_absent<S>(value: &Option<EcosystemResult>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(result) => result.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
