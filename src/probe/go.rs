//! Go probe backed by `go list -u -m all`

use super::{run_failure, Probe};
use crate::domain::{Ecosystem, EcosystemReport, EcosystemResult, UpdateRecord};
use crate::parser::{classify, parse_go_list};
use crate::runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// Probe for a single Go module directory
pub struct GoProbe;

#[async_trait]
impl Probe for GoProbe {
    async fn analyze(&self, runner: &dyn CommandRunner, dir: &Path) -> EcosystemResult {
        let manifest = self.ecosystem().manifest_filename();
        if !dir.join(manifest).exists() {
            return EcosystemResult::failed(format!("{} not found", manifest));
        }

        let output = runner.run("go", &["list", "-u", "-m", "all"], dir).await;
        if !output.is_success() {
            return run_failure(self.ecosystem(), &output.stderr);
        }

        let parsed = parse_go_list(&output.stdout);
        let mut report = EcosystemReport::for_module(dir);
        report.set_total_deps(parsed.line_count);
        for module in &parsed.modules {
            if let Some(latest) = module.available_update() {
                let change_type = classify(&module.current, latest);
                report.push_update(UpdateRecord::new(
                    &module.name,
                    &module.current,
                    latest,
                    change_type,
                ));
            }
        }

        debug!(
            module = %dir.display(),
            total = report.total_deps(),
            outdated = report.outdated_count(),
            "analyzed go module"
        );
        report.into()
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChangeType;
    use crate::runner::testing::ScriptedRunner;
    use crate::runner::CommandOutput;

    const LIST_CMD: &str = "go list -u -m all";

    fn module_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("go.mod"), "module example.com/app\n\ngo 1.21\n").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_missing_go_mod() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::new();
        let result = GoProbe.analyze(&runner, dir.path()).await;
        assert_eq!(result.error(), Some("go.mod not found"));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_run_failure() {
        let dir = module_dir();
        let runner = ScriptedRunner::new().on(LIST_CMD, CommandOutput::timed_out());
        let result = GoProbe.analyze(&runner, dir.path()).await;
        assert_eq!(result.error(), Some("Failed to run go list: Command timed out"));
    }

    #[tokio::test]
    async fn test_collects_available_updates() {
        let dir = module_dir();
        let output = "example.com/app\n\
                      github.com/stretchr/testify v1.8.0 [v1.9.0]\n\
                      golang.org/x/text v0.14.0\n\
                      google.golang.org/grpc v1.60.0 [v2.0.0]\n\
                      github.com/pkg/errors v0.9.1 [v0.9.1]\n";
        let runner = ScriptedRunner::new().on(LIST_CMD, CommandOutput::success(output));

        let result = GoProbe.analyze(&runner, dir.path()).await;
        let EcosystemResult::Analyzed(report) = result else {
            panic!("expected analyzed result");
        };

        assert_eq!(report.total_deps(), 5);
        assert_eq!(report.outdated_count(), 2);
        assert_eq!(report.module_path(), Some(&dir.path().to_path_buf()));

        let updates = report.updates();
        assert_eq!(updates[0].name, "github.com/stretchr/testify");
        assert_eq!(updates[0].current, "v1.8.0");
        assert_eq!(updates[0].latest, "v1.9.0");
        assert_eq!(updates[0].change_type, ChangeType::Minor);
        assert_eq!(updates[0].kind, None);
        assert_eq!(updates[1].change_type, ChangeType::Major);

        assert_eq!(runner.calls()[0].1, dir.path().to_path_buf());
    }
}
