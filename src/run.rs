use anyhow::{Context, Result};
use std::path::Path;
use std::process::{ExitStatus, Output};
use thiserror::Error;

use crate::options::ExecOptions;

/// Captured output of a successful command run.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure of the composed command.
///
/// Carries everything the external tool produced up to the failing step,
/// so the caller can tell which sub-command broke. Downcastable from the
/// `anyhow::Error` the initializers return.
#[derive(Debug, Error)]
#[error("command exited with {status}: {stderr}")]
pub struct ExecError {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shell binary and its "run one command string" flag.
fn shell_invocation(exec: &ExecOptions) -> (String, &'static str) {
    match &exec.shell {
        Some(shell) => (shell.clone(), "-c"),
        None if cfg!(windows) => ("cmd".to_string(), "/C"),
        None => ("sh".to_string(), "-c"),
    }
}

/// Run `command` through the shell, blocking until it exits.
///
/// The working directory is forced to `cwd`; `exec.env` is merged over
/// the inherited environment.
///
/// # Errors
/// Returns an error if the shell cannot be spawned, or an [`ExecError`]
/// if the command exits non-zero.
pub(crate) fn run_sync(command: &str, cwd: &Path, exec: &ExecOptions) -> Result<CommandOutput> {
    let (shell, flag) = shell_invocation(exec);
    let output = std::process::Command::new(&shell)
        .arg(flag)
        .arg(command)
        .current_dir(cwd)
        .envs(&exec.env)
        .output()
        .with_context(|| format!("failed to spawn {}: {}", shell, command))?;
    collect(output)
}

/// Async variant of [`run_sync`], backed by `tokio::process`.
pub(crate) async fn run_async(
    command: &str,
    cwd: &Path,
    exec: &ExecOptions,
) -> Result<CommandOutput> {
    let (shell, flag) = shell_invocation(exec);
    let output = tokio::process::Command::new(&shell)
        .arg(flag)
        .arg(command)
        .current_dir(cwd)
        .envs(&exec.env)
        .output()
        .await
        .with_context(|| format!("failed to spawn {}: {}", shell, command))?;
    collect(output)
}

fn collect(output: Output) -> Result<CommandOutput> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(ExecError {
            status: output.status,
            stdout,
            stderr,
        }
        .into())
    }
}
