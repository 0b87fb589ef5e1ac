//! Crate entry point for **first-commit**.
//!
//! This library initializes a git repository in a target directory, seeds
//! it with a placeholder file when empty, stages files, and creates the
//! first commit, optionally registering a remote and force-pushing to it.
//! All version-control semantics belong to the external `git` executable;
//! the crate only composes one `&&`-joined command string and runs it
//! through the shell.
//!
//! Each submodule encapsulates one responsibility (option handling,
//! command composition, shell execution, etc.). The `pub use` re-exports
//! make the public surface accessible directly from the crate root.

mod command;
mod config;
mod dir;
mod init;
mod options;
mod remote;
mod run;

/// Re-export the public surface so it can be accessed from `first_commit::*`.
pub use command::{build_command, compose_command};
pub use config::{FileConfig, SeedFileConfig, load_file_config};
pub use init::{init, init_sync};
pub use options::{ExecOptions, Options, SeedFile};
pub use remote::is_git_url;
pub use run::{CommandOutput, ExecError};
