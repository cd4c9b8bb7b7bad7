//! External process seam for the capture tool.

use std::process::Command;

use tracing::debug;

use super::errors::CaptureError;

/// Exit status and captured text of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Diagnostic text: stderr when it has content, stdout otherwise
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

/// Runs a program to completion and reports its outcome.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, CaptureError>;
}

/// Runs programs with `std::process::Command`, waiting synchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, CaptureError> {
        debug!(event = "core.capture.process_spawn_started", program = program, args = ?args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CaptureError::SpawnFailed {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
