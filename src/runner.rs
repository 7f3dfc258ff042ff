//! External command execution with a bounded timeout
//!
//! This module provides:
//! - A uniform (exit code, stdout, stderr) result for every invocation
//! - A runner trait so probes can be driven without real tools
//! - The system runner, which never fails: timeouts and launch errors are
//!   folded into a failed `CommandOutput`

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Default timeout for a single external command (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Exit code reported when the command could not run to completion
pub const FAILURE_CODE: i32 = 1;

/// Stderr reported when the command exceeded its timeout
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// Captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code
    pub code: i32,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl CommandOutput {
    /// Create a result from raw parts
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a successful result with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, String::new())
    }

    /// Create a failed result with empty stdout
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self::new(FAILURE_CODE, String::new(), stderr)
    }

    /// Create the result reported for a timed out command
    pub fn timed_out() -> Self {
        Self::failure(TIMEOUT_MESSAGE)
    }

    /// Returns true if the command exited with code 0
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Trait for running external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, never failing
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput;
}

/// Runner that executes real processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    /// Create a runner with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a runner with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the per-command timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput {
        debug!(program, ?args, cwd = %cwd.display(), "running command");

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => {
                let code = output.status.code().unwrap_or(FAILURE_CODE);
                debug!(program, code, "command finished");
                CommandOutput::new(
                    code,
                    String::from_utf8_lossy(&output.stdout),
                    String::from_utf8_lossy(&output.stderr),
                )
            }
            Ok(Err(e)) => {
                debug!(program, error = %e, "failed to execute command");
                CommandOutput::failure(e.to_string())
            }
            Err(_) => {
                warn!(
                    program,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "command timed out"
                );
                CommandOutput::timed_out()
            }
        }
    }
}

/// Runner returning canned outputs, for unit tests of probes and the analyzer
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct ScriptedRunner {
        outputs: HashMap<String, CommandOutput>,
        calls: Mutex<Vec<(String, PathBuf)>>,
    }

    impl ScriptedRunner {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Register the output for a full command line such as `go list -u -m all`
        pub(crate) fn on(mut self, command_line: &str, output: CommandOutput) -> Self {
            self.outputs.insert(command_line.to_string(), output);
            self
        }

        pub(crate) fn calls(&self) -> Vec<(String, PathBuf)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput {
            let mut command_line = vec![program];
            command_line.extend_from_slice(args);
            let command_line = command_line.join(" ");
            self.calls
                .lock()
                .unwrap()
                .push((command_line.clone(), cwd.to_path_buf()));
            self.outputs
                .get(&command_line)
                .cloned()
                .unwrap_or_else(|| CommandOutput::failure("No such file or directory (os error 2)"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        let output = CommandOutput::success("done");
        assert!(output.is_success());
        assert_eq!(output.stdout, "done");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_command_output_failure() {
        let output = CommandOutput::failure("boom");
        assert!(!output.is_success());
        assert_eq!(output.code, FAILURE_CODE);
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, "boom");
    }

    #[test]
    fn test_command_output_timed_out() {
        let output = CommandOutput::timed_out();
        assert_eq!(output.code, FAILURE_CODE);
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, "Command timed out");
    }

    #[test]
    fn test_system_runner_default_timeout() {
        assert_eq!(SystemRunner::new().timeout(), Duration::from_secs(30));
        assert_eq!(
            SystemRunner::with_timeout(Duration::from_millis(5)).timeout(),
            Duration::from_millis(5)
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_failure() {
        let runner = SystemRunner::new();
        let output = runner
            .run("deps-analyze-definitely-missing-binary", &["--version"], Path::new("."))
            .await;
        assert_eq!(output.code, FAILURE_CODE);
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_exit_code_and_streams() {
        let runner = SystemRunner::new();
        let output = runner
            .run("sh", &["-c", "echo out; echo err >&2; exit 3"], Path::new("."))
            .await;
        assert_eq!(output.code, 3);
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();

        let runner = SystemRunner::new();
        let output = runner.run("ls", &[], temp_dir.path()).await;
        assert!(output.is_success());
        assert!(output.stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout() {
        let runner = SystemRunner::with_timeout(Duration::from_millis(200));
        let output = runner.run("sleep", &["5"], Path::new(".")).await;
        assert_eq!(output, CommandOutput::timed_out());
    }
}
