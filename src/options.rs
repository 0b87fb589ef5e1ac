use std::collections::BTreeMap;
use std::path::PathBuf;

/// A placeholder file written into the target directory so an otherwise
/// empty repository has something to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl Default for SeedFile {
    fn default() -> Self {
        SeedFile {
            path: PathBuf::from(".gitkeep"),
            contents: String::new(),
        }
    }
}

/// Pass-through settings for the shell invocation that runs the composed
/// command. The working directory is always forced to the resolved target
/// and cannot be overridden here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Extra environment variables merged over the inherited environment.
    pub env: BTreeMap<String, String>,
    /// Shell binary to run the command with. Defaults to `sh` (or `cmd`
    /// on Windows).
    pub shell: Option<String>,
}

/// Options for a single repository initialization.
///
/// Mirrors the flags accepted by the `first-commit` binary. Everything is
/// optional; [`Options::default`] produces a repository with one empty
/// `.gitkeep` file and one commit with the message `first commit`.
///
/// Example:
/// ```no_run
/// use first_commit::{Options, init_sync};
///
/// let opts = Options {
///     message: "bootstrap".into(),
///     ..Options::default()
/// };
/// init_sync("my-project", opts).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Commit message. An empty string falls back to `First commit`.
    pub message: String,
    /// Seed file written when the directory is empty (or when
    /// [`force_file`](Options::force_file) is set). `None` disables it.
    pub file: Option<SeedFile>,
    /// Write the seed file even when the target directory is not empty.
    pub force_file: bool,
    /// Stage and commit after `git init`.
    pub commit: bool,
    /// Legacy alias for `commit: false`. Folded into
    /// [`commit`](Options::commit) by [`normalized`](Options::normalized)
    /// and never consulted afterwards.
    pub skip_commit: bool,
    /// Remote URL to register as `origin`. Values that are not
    /// well-formed git URLs are silently ignored.
    pub remote: Option<String>,
    /// Force-push the first commit to `origin`. Only takes effect when a
    /// valid remote was registered.
    pub push: bool,
    /// Paths or globs passed to `git add`. Empty means stage everything.
    pub files: Vec<String>,
    /// Execution settings forwarded to the shell invocation.
    pub exec: ExecOptions,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            message: "first commit".to_string(),
            file: Some(SeedFile::default()),
            force_file: false,
            commit: true,
            skip_commit: false,
            remote: None,
            push: false,
            files: Vec::new(),
            exec: ExecOptions::default(),
        }
    }
}

impl Options {
    /// Fold legacy fields into their canonical form.
    ///
    /// Called once at every entry point, so the rest of the crate only
    /// ever looks at [`commit`](Options::commit).
    pub fn normalized(mut self) -> Self {
        if self.skip_commit {
            self.commit = false;
            self.skip_commit = false;
        }
        self
    }
}
