use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::{Options, SeedFile};

/// Defaults file for the `first-commit` binary, merged under the command
/// line flags.
///
/// Every key is optional; absent keys leave the built-in defaults alone.
///
/// Example TOML:
/// ```toml
/// message = "initial scaffold"
/// remote  = "git@github.com:me/project.git"
/// push    = true
///
/// [file]
/// path     = "README.md"
/// contents = "# project"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub message: Option<String>,
    pub file: Option<SeedFileConfig>,
    pub commit: Option<bool>,
    pub remote: Option<String>,
    pub push: Option<bool>,
    pub files: Option<Vec<String>>,
}

/// `[file]` table of the defaults file.
#[derive(Debug, Deserialize)]
pub struct SeedFileConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub contents: String,
}

impl FileConfig {
    /// Fold the file's values into `opts`. Only keys present in the file
    /// are applied, so command line flags processed afterwards win.
    pub fn merge_into(self, opts: &mut Options) {
        if let Some(message) = self.message {
            opts.message = message;
        }
        if let Some(file) = self.file {
            opts.file = Some(SeedFile {
                path: file.path,
                contents: file.contents,
            });
        }
        if let Some(commit) = self.commit {
            opts.commit = commit;
        }
        if let Some(remote) = self.remote {
            opts.remote = Some(remote);
        }
        if let Some(push) = self.push {
            opts.push = push;
        }
        if let Some(files) = self.files {
            opts.files = files;
        }
    }
}

/// Load and parse a defaults file into a [`FileConfig`].
///
/// # Errors
/// - Returns an error if the file cannot be read.
/// - Returns an error if parsing the TOML fails.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("config not found: {}", path.display()))?;
    let cfg: FileConfig =
        toml::from_str(&txt).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(cfg)
}
