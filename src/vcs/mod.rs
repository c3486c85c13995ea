//! Read-only git queries.

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;

/// Read-only queries against a working tree.
///
/// `None` (or `false`) means the query exited non-zero or could not be run.
pub trait VcsQuery {
    /// Root of the working tree containing `dir`.
    fn toplevel(&self, dir: &Path) -> Option<PathBuf>;

    /// Names of the configured remotes.
    fn remotes(&self, root: &Path) -> Option<Vec<String>>;

    /// Upstream of the current branch, e.g. `origin/main`.
    fn upstream(&self, root: &Path) -> Option<String>;

    /// Fetch URL of `remote`.
    fn remote_url(&self, root: &Path, remote: &str) -> Option<String>;

    /// Full hash of `HEAD`.
    fn head(&self, root: &Path) -> Option<String>;

    /// Remote-tracking branches (`origin/main`, ...) containing `rev`.
    fn remote_branches_containing(&self, root: &Path, rev: &str) -> Option<Vec<String>>;

    /// Whether `path` exists at `rev`.
    fn file_exists_at(&self, root: &Path, rev: &str, path: &str) -> bool;

    /// Diff of `path` between the working tree and `rev`.
    fn diff(&self, root: &Path, rev: &str, path: &str) -> Option<String>;
}

/// [`VcsQuery`] backed by the `git` executable on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git;

impl Git {
    fn run(dir: &Path, args: &[&str]) -> Option<String> {
        log::debug!("git -C {} {}", dir.display(), args.join(" "));
        let output = match Command::new("git").arg("-C").arg(dir).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("failed to run git: {e}");
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "git {} exited with {:?}: {}",
                args.first().copied().unwrap_or_default(),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_non_empty(dir: &Path, args: &[&str]) -> Option<String> {
        Self::run(dir, args).filter(|out| !out.is_empty())
    }
}

impl VcsQuery for Git {
    fn toplevel(&self, dir: &Path) -> Option<PathBuf> {
        Self::run_non_empty(dir, &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    fn remotes(&self, root: &Path) -> Option<Vec<String>> {
        let out = Self::run(root, &["remote"])?;
        Some(out.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    fn upstream(&self, root: &Path) -> Option<String> {
        Self::run_non_empty(
            root,
            &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
        )
    }

    fn remote_url(&self, root: &Path, remote: &str) -> Option<String> {
        Self::run_non_empty(root, &["remote", "get-url", remote])
    }

    fn head(&self, root: &Path) -> Option<String> {
        Self::run_non_empty(root, &["rev-parse", "HEAD"])
    }

    fn remote_branches_containing(&self, root: &Path, rev: &str) -> Option<Vec<String>> {
        let out = Self::run(root, &["branch", "--remotes", "--contains", rev])?;
        // Lines look like "  origin/main" or "  origin/HEAD -> origin/main"
        Some(
            out.lines()
                .filter_map(|line| line.split_whitespace().next())
                .map(String::from)
                .collect(),
        )
    }

    fn file_exists_at(&self, root: &Path, rev: &str, path: &str) -> bool {
        Self::run(root, &["cat-file", "-e", &format!("{rev}:{path}")]).is_some()
    }

    fn diff(&self, root: &Path, rev: &str, path: &str) -> Option<String> {
        Self::run(root, &["diff", rev, "--", path])
    }
}
