//! Ecosystem probes
//!
//! A probe shells out to an ecosystem's own tooling through a
//! [`CommandRunner`] and normalizes the output into an [`EcosystemResult`].
//! Probes never fail: missing tools, non-zero exits and undecodable output
//! all become `EcosystemResult::Failed`.

mod cargo;
mod go;

pub use cargo::CargoProbe;
pub use go::GoProbe;

use crate::domain::{Ecosystem, EcosystemResult};
use crate::runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;

/// Trait for per-ecosystem dependency probes
#[async_trait]
pub trait Probe: Send + Sync {
    /// Analyze the project or module rooted at `dir`
    async fn analyze(&self, runner: &dyn CommandRunner, dir: &Path) -> EcosystemResult;

    /// Returns the ecosystem this probe handles
    fn ecosystem(&self) -> Ecosystem;
}

/// Get the probe for the specified ecosystem
pub fn get_probe(ecosystem: Ecosystem) -> Box<dyn Probe> {
    match ecosystem {
        Ecosystem::Rust => Box::new(CargoProbe),
        Ecosystem::Go => Box::new(GoProbe),
    }
}

/// Format the error reported when a tool exits with a non-zero code
fn run_failure(ecosystem: Ecosystem, stderr: &str) -> EcosystemResult {
    EcosystemResult::failed(format!(
        "Failed to run {}: {}",
        ecosystem.tool_name(),
        stderr.trim_end()
    ))
}
