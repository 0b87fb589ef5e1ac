//! # first-commit
//!
//! **first-commit** initializes a git repository with a single command.
//!
//! Features:
//! - `git init` in a target directory (created if missing)
//! - seeds an empty directory with a placeholder file (default `.gitkeep`)
//! - stages everything and creates a first commit (default message
//!   `first commit`)
//! - optionally registers a remote as `origin` and force-pushes to it
//! - `--dry-run` prints the composed command without running anything
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use first_commit::{Options, SeedFile, build_command, init_sync, load_file_config};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "first-commit",
    version,
    about = "initialize a git repository and create the first commit"
)]
struct Cli {
    /// Target directory, created if missing
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Commit message
    #[arg(short, long)]
    message: Option<String>,

    /// Seed file written when the directory is empty
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Contents for the seed file
    #[arg(long, value_name = "TEXT", requires = "file")]
    contents: Option<String>,

    /// Never write a seed file
    #[arg(long, conflicts_with_all = ["file", "contents", "force_file"])]
    no_file: bool,

    /// Write the seed file even when the directory is not empty
    #[arg(long)]
    force_file: bool,

    /// Skip git add / git commit
    #[arg(long)]
    no_commit: bool,

    /// Remote URL registered as origin
    #[arg(long, value_name = "URL")]
    remote: Option<String>,

    /// Force-push the first commit to origin
    #[arg(long, requires = "remote")]
    push: bool,

    /// Paths or globs to stage instead of everything
    #[arg(long, value_name = "PATH", num_args = 1..)]
    files: Vec<String>,

    /// Read defaults from a TOML file (flags win over file values)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the composed command without running it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Assemble [`Options`] from the defaults file (if any) with the
    /// command line flags layered on top.
    fn to_options(&self) -> Result<Options> {
        let mut opts = Options::default();
        if let Some(path) = &self.config {
            load_file_config(path)?.merge_into(&mut opts);
        }
        if let Some(message) = &self.message {
            opts.message = message.clone();
        }
        if let Some(path) = &self.file {
            opts.file = Some(SeedFile {
                path: path.clone(),
                contents: self.contents.clone().unwrap_or_default(),
            });
        }
        if self.no_file {
            opts.file = None;
        }
        if self.force_file {
            opts.force_file = true;
        }
        if self.no_commit {
            opts.commit = false;
        }
        if let Some(remote) = &self.remote {
            opts.remote = Some(remote.clone());
        }
        if self.push {
            opts.push = true;
        }
        if !self.files.is_empty() {
            opts.files = self.files.clone();
        }
        Ok(opts)
    }
}

/// CLI entry point.
///
/// Parses arguments with `clap`, runs the blocking initializer, and
/// relays git's own output.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.to_options()?;

    if cli.dry_run {
        println!("{}", build_command(&cli.dir, &opts)?);
        return Ok(());
    }

    let out = init_sync(&cli.dir, opts)?;
    println!("{} initialized {}", "ok".green().bold(), cli.dir.display());
    if !out.stdout.is_empty() {
        print!("{}", out.stdout);
    }
    Ok(())
}
