//! `gitlink file` and `gitlink repo`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use gitlink::config::{Config, ConfigOverride};
use gitlink::vcs::VcsQuery;
use gitlink::{generate_range_link, generate_repo_link, Git, LinkContext, Selection};

/// Parse `START:END` or `START-END` (either order, 1-based).
pub fn parse_range(s: &str) -> Result<(u32, u32), String> {
    let (a, b) = s
        .split_once(':')
        .or_else(|| s.split_once('-'))
        .ok_or_else(|| format!("expected START:END, got {s:?}"))?;
    let parse = |n: &str| -> Result<u32, String> {
        match n.trim().parse::<u32>() {
            Ok(0) => Err("line numbers start at 1".to_string()),
            Ok(n) => Ok(n),
            Err(_) => Err(format!("invalid line number {n:?}")),
        }
    };
    Ok((parse(a)?, parse(b)?))
}

/// Resolve and deliver a link to `path`, anchored per `line`, `range` and `no_line`.
pub fn cmd_file(
    path: &Path,
    line: Option<u32>,
    range: Option<(u32, u32)>,
    no_line: bool,
    mut overrides: ConfigOverride,
) -> Result<()> {
    if no_line {
        overrides.include_line_in_point_mode = Some(false);
    }
    let config = Config::load()?.merged(&overrides);

    let selection = match range {
        Some((anchor, cursor)) => Selection::Range { anchor, cursor },
        None => Selection::Point { cursor: line },
    };
    // Lines are frozen before the first git query runs.
    let mut ctx = LinkContext::capture(regular_file(path), None, selection, &config);
    ctx.repo_root = ctx
        .file
        .as_deref()
        .and_then(Path::parent)
        .and_then(|dir| Git.toplevel(dir))
        .and_then(|root| root.canonicalize().ok());

    generate_range_link(&Git, &ctx, &config)?;
    Ok(())
}

/// Resolve and deliver a link to the repository containing `dir` (or the cwd).
pub fn cmd_repo(dir: Option<PathBuf>, overrides: &ConfigOverride) -> Result<()> {
    let config = Config::load()?.merged(overrides);
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let root = Git.toplevel(&dir);

    generate_repo_link(&Git, root.as_deref(), &config)?;
    Ok(())
}

/// Absolute, canonical form of `path` when it names a regular file.
fn regular_file(path: &Path) -> Option<PathBuf> {
    let path = path.canonicalize().ok()?;
    path.is_file().then_some(path)
}
