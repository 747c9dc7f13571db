//! External process execution.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub success: bool,
}

/// Runs external programs. Injected so callers can be tested without spawning.
pub trait ProcessRunner {
    /// Run to completion and capture stdout.
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<ProcessOutput>;

    /// Start a program without waiting for it or reading its output.
    fn spawn(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Runs programs on the host. Programs not found on `PATH` fail immediately.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<ProcessOutput> {
        let resolved = which::which(program)
            .with_context(|| format!("'{}' is not installed or not on PATH", program))?;

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!(cmd = ?cmd, "cmd:run");

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        if !output.status.success() {
            debug!(
                program,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "cmd:failed"
            );
        }

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            success: output.status.success(),
        })
    }

    fn spawn(&self, program: &str, args: &[String]) -> Result<()> {
        let resolved = which::which(program)
            .with_context(|| format!("'{}' is not installed or not on PATH", program))?;

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!(cmd = ?cmd, "cmd:spawn");

        // The child is left running; browsers started by a launcher can outlive us
        cmd.spawn()
            .with_context(|| format!("Failed to spawn {}", program))?;
        Ok(())
    }
}
