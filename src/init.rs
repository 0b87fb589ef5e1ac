use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf, absolute};

use crate::command::build_command;
use crate::options::Options;
use crate::run::{CommandOutput, run_async, run_sync};

/// Resolve the target directory to an absolute path and locate its
/// repository marker. Fails if the marker already exists.
fn resolve_target(dir: &Path) -> Result<PathBuf> {
    let dir = absolute(dir)
        .with_context(|| format!("failed to resolve target directory: {}", dir.display()))?;
    let marker = dir.join(".git");
    if marker.exists() {
        bail!(".git repository already exists in: {}", marker.display());
    }
    Ok(dir)
}

/// Initialize a git repository in `dir` and create the first commit.
///
/// Flow:
/// 1. Fail if `dir` already contains a `.git` marker. Nothing is touched
///    after this failure.
/// 2. Create `dir` (and parents) if missing.
/// 3. Run the composed command (see [`build_command`]) through the shell
///    with the working directory forced to `dir`.
///
/// `dir` may be relative; it is resolved against the process working
/// directory, so `"."` initializes the current directory.
///
/// # Errors
/// - The target already contains a repository.
/// - The directory cannot be created.
/// - The external command fails; the error downcasts to
///   [`ExecError`](crate::ExecError) with the captured output.
pub async fn init(dir: impl AsRef<Path>, opts: Options) -> Result<CommandOutput> {
    let opts = opts.normalized();
    let dir = resolve_target(dir.as_ref())?;
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    let command = build_command(&dir, &opts)?;
    run_async(&command, &dir, &opts.exec).await
}

/// Blocking variant of [`init`]. Same flow, same failure semantics.
pub fn init_sync(dir: impl AsRef<Path>, opts: Options) -> Result<CommandOutput> {
    let opts = opts.normalized();
    let dir = resolve_target(dir.as_ref())?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    let command = build_command(&dir, &opts)?;
    run_sync(&command, &dir, &opts.exec)
}
