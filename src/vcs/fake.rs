use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::VcsQuery;

/// Scripted [`VcsQuery`] that records the name of every query it answers.
#[derive(Debug, Default)]
pub(crate) struct FakeVcs {
    pub toplevel: Option<PathBuf>,
    pub remotes: Vec<String>,
    pub upstream: Option<String>,
    pub urls: Vec<(String, String)>,
    pub head: Option<String>,
    pub containing: Vec<String>,
    pub files: HashSet<String>,
    pub diff: String,
    pub calls: RefCell<Vec<&'static str>>,
}

impl FakeVcs {
    /// One `origin` remote at `url`, a pushed HEAD and `src/lib.rs` committed.
    pub fn github(url: &str) -> Self {
        Self {
            toplevel: Some(PathBuf::from("/work/repo")),
            remotes: vec!["origin".into()],
            urls: vec![("origin".into(), url.into())],
            head: Some("abcd123".into()),
            containing: vec!["origin/main".into()],
            files: HashSet::from(["src/lib.rs".to_string()]),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }
}

impl VcsQuery for FakeVcs {
    fn toplevel(&self, _dir: &Path) -> Option<PathBuf> {
        self.record("toplevel");
        self.toplevel.clone()
    }

    fn remotes(&self, _root: &Path) -> Option<Vec<String>> {
        self.record("remotes");
        Some(self.remotes.clone())
    }

    fn upstream(&self, _root: &Path) -> Option<String> {
        self.record("upstream");
        self.upstream.clone()
    }

    fn remote_url(&self, _root: &Path, remote: &str) -> Option<String> {
        self.record("remote_url");
        self.urls
            .iter()
            .find(|(name, _)| name == remote)
            .map(|(_, url)| url.clone())
    }

    fn head(&self, _root: &Path) -> Option<String> {
        self.record("head");
        self.head.clone()
    }

    fn remote_branches_containing(&self, _root: &Path, _rev: &str) -> Option<Vec<String>> {
        self.record("containing");
        Some(self.containing.clone())
    }

    fn file_exists_at(&self, _root: &Path, _rev: &str, path: &str) -> bool {
        self.record("file_exists");
        self.files.contains(path)
    }

    fn diff(&self, _root: &Path, _rev: &str, _path: &str) -> Option<String> {
        self.record("diff");
        Some(self.diff.clone())
    }
}
