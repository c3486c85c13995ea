use std::process::Command;

use super::*;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// A repository with one commit on branch `work`, an `origin` remote and a
/// remote-tracking ref for it. Returns `None` when git is unavailable.
fn fixture() -> Option<tempfile::TempDir> {
    if which::which("git").is_err() {
        eprintln!("git not found on PATH, skipping");
        return None;
    }
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    git(root, &["init", "-q"]);
    git(root, &["checkout", "-q", "-b", "work"]);
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("src/lib.rs"), "fn main() {}\n").unwrap();
    git(root, &["add", "."]);
    git(root, &["commit", "-q", "-m", "init"]);
    git(root, &["remote", "add", "origin", "git@github.com:acme/api.git"]);
    git(root, &["update-ref", "refs/remotes/origin/work", "HEAD"]);
    git(root, &["branch", "-q", "--set-upstream-to=origin/work"]);
    Some(dir)
}

#[test]
fn test_git_toplevel() {
    let Some(dir) = fixture() else { return };
    let top = Git.toplevel(&dir.path().join("src")).unwrap();
    assert_eq!(
        top.canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_git_toplevel_outside_repo() {
    if which::which("git").is_err() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    // A temp dir can sit inside some outer checkout; only assert when it doesn't.
    if let Some(top) = Git.toplevel(dir.path()) {
        assert!(!top.starts_with(dir.path()));
    }
}

#[test]
fn test_git_remote_queries() {
    let Some(dir) = fixture() else { return };
    let root = dir.path();
    assert_eq!(Git.remotes(root).unwrap(), vec!["origin".to_string()]);
    assert_eq!(Git.upstream(root).as_deref(), Some("origin/work"));
    assert_eq!(
        Git.remote_url(root, "origin").as_deref(),
        Some("git@github.com:acme/api.git")
    );
    assert!(Git.remote_url(root, "missing").is_none());
}

#[test]
fn test_git_revision_queries() {
    let Some(dir) = fixture() else { return };
    let root = dir.path();
    let head = Git.head(root).unwrap();
    assert_eq!(head.len(), 40);

    let branches = Git.remote_branches_containing(root, &head).unwrap();
    assert_eq!(branches, vec!["origin/work".to_string()]);

    assert!(Git.file_exists_at(root, &head, "src/lib.rs"));
    assert!(!Git.file_exists_at(root, &head, "src/missing.rs"));
}

#[test]
fn test_git_diff() {
    let Some(dir) = fixture() else { return };
    let root = dir.path();
    let head = Git.head(root).unwrap();
    assert_eq!(Git.diff(root, &head, "src/lib.rs").as_deref(), Some(""));

    std::fs::write(root.join("src/lib.rs"), "fn main() { todo!() }\n").unwrap();
    assert!(!Git.diff(root, &head, "src/lib.rs").unwrap().is_empty());
}
