use regex::Regex;
use std::sync::LazyLock;

/// Accepts the address forms git itself understands for cloning:
/// `git://`, `ssh://`, `http(s)://`, and scp-like `git@host:path`, all
/// ending in `.git` with an optional trailing slash or `#fragment`.
static GIT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:git|ssh|https?|git@[-\w.]+):(//)?(.*?)\.git(/?|#[-\w.]+?)$").unwrap()
});

/// Whether `url` looks like a well-formed git repository URL.
///
/// Used to gate the `git remote add origin` step; an address that fails
/// this check is silently skipped rather than treated as an error.
pub fn is_git_url(url: &str) -> bool {
    GIT_URL.is_match(url)
}
