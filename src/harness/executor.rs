//! Target execution
//!
//! The target is a black box: it receives the input path as its only argument,
//! and the harness captures its stdout, stderr and exit code once it exits.
//! There is no timeout, so a target that never exits stalls the run.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use super::enumerator::TestCase;

/// Everything captured from one completed target run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    /// Diagnostics only; never compared against a reference
    pub stderr: String,
    /// Process exit code. A run killed by signal `N` reports `-N` on Unix.
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The target could not be run to completion
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to run {}: {source}", .exe.display())]
    Spawn {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs the target against one test case.
///
/// Implementations block until the target exits. Fakes in tests implement this
/// to drive the harness without spawning processes.
pub trait TestExecutor {
    fn execute(&self, exe: &Path, case: &TestCase) -> Result<ExecutionResult, ExecError>;
}

/// Spawns the target as a child process (stdin closed, stdout/stderr piped).
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl TestExecutor for ProcessExecutor {
    fn execute(&self, exe: &Path, case: &TestCase) -> Result<ExecutionResult, ExecError> {
        tracing::debug!(exe = %exe.display(), input = %case.input().display(), "spawning target");

        let output = Command::new(exe)
            .arg(case.input())
            .output()
            .map_err(|source| ExecError::Spawn {
                exe: exe.to_path_buf(),
                source,
            })?;

        let result = ExecutionResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code(output.status),
        };
        tracing::debug!(test = case.name(), exit_code = result.exit_code, "target exited");
        Ok(result)
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.code().or_else(|| status.signal().map(|s| -s)).unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
