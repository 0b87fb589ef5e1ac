use anyhow::Result;
use std::io;
use std::path::Path;

use crate::dir::is_empty_dir;
use crate::options::Options;
use crate::remote::is_git_url;

/// Final optional step; the pushed ref is always `master:master`.
const PUSH_COMMAND: &str = "git push --force origin master:master";

/// Compose the full command sequence for `opts`, joined with `&&` so a
/// failing step stops the rest.
///
/// This is the pure core of the crate: no filesystem access, no process
/// spawning. Directory emptiness is an input rather than something this
/// function probes, so identical arguments always yield an identical
/// string.
///
/// Steps, in order (conditional steps are simply omitted):
/// 1. `git init`
/// 2. seed-file creation, when a seed file is configured and either
///    `force_file` is set or the directory is empty
/// 3. `git add` + `git commit`, when committing is enabled
/// 4. `git remote add origin`, when the remote is a well-formed git URL
/// 5. a forced push, when `push` is set and step 4 ran
pub fn compose_command(opts: &Options, dir_is_empty: bool) -> String {
    let mut args = vec!["git init".to_string()];
    let files = if opts.files.is_empty() {
        ".".to_string()
    } else {
        opts.files.join(" ")
    };

    if let Some(file) = &opts.file
        && (opts.force_file || dir_is_empty)
    {
        args.push(format!("touch \"{}\"", file.path.display()));
        if !file.contents.is_empty() {
            args.push(format!(
                "echo \"{}\" >> {}",
                file.contents,
                file.path.display()
            ));
        }
    }

    if opts.commit {
        args.push(format!("git add {}", files));
        args.push(format!("git commit -m {}", quote_message(&opts.message)));
    }

    if let Some(remote) = opts.remote.as_deref()
        && is_git_url(remote)
    {
        args.push(format!("git remote add origin {}", remote));
        if opts.push {
            args.push(PUSH_COMMAND.to_string());
        }
    }

    args.join(" && ")
}

/// Compose the command for initializing `dir`, probing the directory for
/// emptiness first.
///
/// A directory that does not exist yet counts as empty, since the
/// initializers create it right before running the command. Other probe
/// failures (permissions, not a directory) propagate.
///
/// # Errors
/// Returns an error if the directory exists but cannot be read.
pub fn build_command(dir: &Path, opts: &Options) -> Result<String> {
    let opts = opts.clone().normalized();
    let empty = match is_empty_dir(dir) {
        Ok(empty) => empty,
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => return Err(e.into()),
    };
    Ok(compose_command(&opts, empty))
}

/// Wrap `message` in double quotes unless it already carries them.
///
/// An empty message falls back to `First commit`. A message whose first
/// or last character is already a quote passes through unchanged, so
/// quoting is applied at most once.
fn quote_message(message: &str) -> String {
    let message = if message.is_empty() {
        "First commit"
    } else {
        message
    };
    if !message.starts_with('"') && !message.ends_with('"') {
        format!("\"{}\"", message)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SeedFile;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn defaults_init_seed_add_commit() {
        let cmd = compose_command(&Options::default(), true);
        assert_eq!(
            cmd,
            "git init && touch \".gitkeep\" && git add . && git commit -m \"first commit\""
        );
    }

    #[test]
    fn deterministic_for_equal_input() {
        let opts = Options {
            remote: Some("git@github.com:foo/bar.git".to_string()),
            push: true,
            ..Options::default()
        };
        let first = compose_command(&opts, true);
        for _ in 0..10 {
            assert_eq!(compose_command(&opts, true), first);
        }
    }

    #[test]
    fn no_file_no_commit_is_init_only() {
        let opts = Options {
            file: None,
            commit: false,
            ..Options::default()
        };
        assert_eq!(compose_command(&opts, true), "git init");
    }

    #[test]
    fn non_empty_dir_omits_seed_steps() {
        let cmd = compose_command(&Options::default(), false);
        assert_eq!(cmd, "git init && git add . && git commit -m \"first commit\"");
    }

    #[test]
    fn force_file_seeds_a_non_empty_dir() {
        let opts = Options {
            force_file: true,
            ..Options::default()
        };
        assert!(compose_command(&opts, false).contains("touch \".gitkeep\""));
    }

    #[test]
    fn force_file_without_a_file_is_a_no_op() {
        let opts = Options {
            file: None,
            force_file: true,
            ..Options::default()
        };
        assert!(!compose_command(&opts, true).contains("touch"));
    }

    #[test]
    fn seed_contents_append_after_touch() {
        let opts = Options {
            file: Some(SeedFile {
                path: "README.md".into(),
                contents: "hello".to_string(),
            }),
            commit: false,
            ..Options::default()
        };
        assert_eq!(
            compose_command(&opts, true),
            "git init && touch \"README.md\" && echo \"hello\" >> README.md"
        );
    }

    #[test]
    fn custom_files_replace_the_default_pathspec() {
        let opts = Options {
            file: None,
            files: vec!["src".to_string(), "Cargo.toml".to_string()],
            ..Options::default()
        };
        assert!(compose_command(&opts, true).contains("git add src Cargo.toml"));
    }

    #[test]
    fn valid_remote_adds_origin_and_push() {
        let opts = Options {
            file: None,
            commit: false,
            remote: Some("git@github.com:foo/bar.git".to_string()),
            push: true,
            ..Options::default()
        };
        assert_eq!(
            compose_command(&opts, true),
            "git init && git remote add origin git@github.com:foo/bar.git \
             && git push --force origin master:master"
        );
    }

    #[test]
    fn invalid_remote_omits_remote_and_push() {
        let opts = Options {
            remote: Some("https://example.com/not-a-repo".to_string()),
            push: true,
            ..Options::default()
        };
        let cmd = compose_command(&opts, true);
        assert!(!cmd.contains("remote add"));
        assert!(!cmd.contains("push"));
    }

    #[test]
    fn push_without_remote_is_omitted() {
        let opts = Options {
            push: true,
            ..Options::default()
        };
        assert!(!compose_command(&opts, true).contains("push"));
    }

    #[test]
    fn unquoted_message_is_wrapped_exactly_once() {
        assert_eq!(quote_message("foo bar"), "\"foo bar\"");
        assert_eq!(quote_message("\"foo bar\""), "\"foo bar\"");
    }

    #[test]
    fn partially_quoted_message_passes_through() {
        assert_eq!(quote_message("\"foo"), "\"foo");
        assert_eq!(quote_message("foo\""), "foo\"");
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(quote_message(""), "\"First commit\"");
    }

    #[test]
    fn build_command_treats_missing_dir_as_empty() {
        let dir = tempdir().unwrap();
        let cmd = build_command(&dir.path().join("new"), &Options::default()).unwrap();
        assert!(cmd.contains("touch \".gitkeep\""));
    }

    #[test]
    fn build_command_skips_seed_for_populated_dir() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("existing.txt")).unwrap();
        let cmd = build_command(dir.path(), &Options::default()).unwrap();
        assert!(!cmd.contains("touch"));
    }

    #[test]
    fn build_command_normalizes_legacy_skip_commit() {
        let dir = tempdir().unwrap();
        let opts = Options {
            file: None,
            skip_commit: true,
            ..Options::default()
        };
        assert_eq!(build_command(dir.path(), &opts).unwrap(), "git init");
    }
}
