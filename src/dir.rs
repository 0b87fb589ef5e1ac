use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// Filenames that do not count as directory contents.
static OS_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Thumbs\.db|\.DS_Store)$").unwrap());

/// Whether `path` contains no entries besides OS junk files.
pub(crate) fn is_empty_dir(path: &Path) -> io::Result<bool> {
    for ent in fs::read_dir(path)? {
        let ent = ent?;
        if !OS_JUNK.is_match(&ent.file_name().to_string_lossy()) {
            return Ok(false);
        }
    }
    Ok(true)
}
