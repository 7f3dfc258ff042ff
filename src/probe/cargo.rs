//! Rust probe backed by cargo-outdated

use super::{run_failure, Probe};
use crate::domain::{Ecosystem, EcosystemReport, EcosystemResult, UpdateRecord};
use crate::parser::{classify, parse_outdated, OutdatedEntry};
use crate::runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the cargo plugin the probe depends on
pub const CARGO_OUTDATED: &str = "cargo-outdated";

/// Role reported when cargo-outdated omits the dependency kind
const UNKNOWN_KIND: &str = "unknown";

/// Probe for the workspace rooted at a Cargo.toml
pub struct CargoProbe;

impl CargoProbe {
    fn to_record(entry: OutdatedEntry) -> UpdateRecord {
        let change_type = classify(&entry.project, &entry.latest);
        let kind = entry.kind.unwrap_or_else(|| UNKNOWN_KIND.to_string());
        UpdateRecord::new(entry.name, entry.project, entry.latest, change_type).with_kind(kind)
    }
}

#[async_trait]
impl Probe for CargoProbe {
    async fn analyze(&self, runner: &dyn CommandRunner, dir: &Path) -> EcosystemResult {
        let version = runner.run("cargo", &["outdated", "--version"], dir).await;
        if !version.is_success() {
            warn!(
                "{} not found. Install with: cargo install {}",
                CARGO_OUTDATED, CARGO_OUTDATED
            );
            return EcosystemResult::failed(format!("{} not installed", CARGO_OUTDATED));
        }

        let output = runner
            .run(
                "cargo",
                &["outdated", "--workspace", "--format", "json"],
                dir,
            )
            .await;
        if !output.is_success() {
            return run_failure(self.ecosystem(), &output.stderr);
        }

        let entries = match parse_outdated(&output.stdout) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(error = %e, "undecodable cargo-outdated output");
                return EcosystemResult::failed(format!(
                    "Failed to parse {} output",
                    self.ecosystem().tool_name()
                ));
            }
        };

        let mut report = EcosystemReport::new();
        report.set_total_deps(entries.len());
        for entry in entries.into_iter().filter(OutdatedEntry::is_outdated) {
            report.push_update(Self::to_record(entry));
        }

        debug!(
            total = report.total_deps(),
            outdated = report.outdated_count(),
            "analyzed cargo dependencies"
        );
        report.into()
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }
}
