use crate::EngineError;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Program name the default runner launches.
pub const DEFAULT_RUNNER_PROGRAM: &str = "drover-test";

/// The external test-runner process, consumed as spawn-and-wait.
///
/// The test mode hands the runner the directory holding compiled build
/// output plus any trailing tokens the operator supplied, then suspends
/// until the process exits. The exit code is propagated verbatim.
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Run the tests against `output_dir`, forwarding `extra_args` verbatim.
    ///
    /// Resolves to the subprocess exit code once it has exited.
    async fn run(&self, output_dir: &Path, extra_args: &[String]) -> Result<i32, EngineError>;
}

/// [`TestRunner`] backed by a real subprocess.
///
/// Launches the configured program with `--output <dir>` followed by the
/// operator's trailing tokens, inheriting the parent's standard streams so
/// test output flows straight through.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl ProcessRunner {
    /// Runner launching the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this runner launches.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_RUNNER_PROGRAM)
    }
}

#[async_trait]
impl TestRunner for ProcessRunner {
    async fn run(&self, output_dir: &Path, extra_args: &[String]) -> Result<i32, EngineError> {
        let status = Command::new(&self.program)
            .arg("--output")
            .arg(output_dir)
            .args(extra_args)
            .status()
            .await
            .map_err(|source| EngineError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        // A signal-terminated process reports no code; treat it as failure.
        Ok(status.code().unwrap_or(1))
    }
}
