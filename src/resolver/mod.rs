//! Remote and revision selection.

use std::path::Path;

use crate::error::{LinkError, SyncWarning};
use crate::remote::RemoteDescriptor;
use crate::vcs::VcsQuery;


const DEFAULT_REMOTE: &str = "origin";

/// Outcome of a full resolution: where the link points and what may be off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Remote the link is built from.
    pub remote: String,
    /// Parsed fetch URL of that remote.
    pub descriptor: RemoteDescriptor,
    /// Commit the link is pinned to.
    pub revision: String,
    /// Non-fatal problems found along the way.
    pub warnings: Vec<SyncWarning>,
}

/// Picks the remote and revision for a working tree. Every query is issued
/// only after the previous one has returned.
pub struct Resolver<'a> {
    vcs: &'a dyn VcsQuery,
    root: &'a Path,
    forced_remote: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    /// Resolver for the working tree at `root`. `forced_remote` skips remote
    /// selection entirely.
    pub fn new(vcs: &'a dyn VcsQuery, root: &'a Path, forced_remote: Option<&'a str>) -> Self {
        Self {
            vcs,
            root,
            forced_remote,
        }
    }

    /// Name of the remote to link against.
    pub fn remote(&self) -> Result<String, LinkError> {
        if let Some(remote) = self.forced_remote {
            return Ok(remote.to_string());
        }

        let remotes = self.vcs.remotes(self.root).unwrap_or_default();
        match remotes.as_slice() {
            [] => Err(LinkError::NoRemote),
            [only] => Ok(only.clone()),
            _ => {
                let remote = self
                    .vcs
                    .upstream(self.root)
                    .and_then(|upstream| {
                        upstream
                            .split_once('/')
                            .map(|(remote, _)| remote.to_string())
                    })
                    .unwrap_or_else(|| DEFAULT_REMOTE.to_string());
                log::debug!("{} remotes configured, using {remote}", remotes.len());
                Ok(remote)
            }
        }
    }

    /// Parsed fetch URL of `remote`.
    pub fn descriptor(&self, remote: &str) -> Result<RemoteDescriptor, LinkError> {
        let url = self
            .vcs
            .remote_url(self.root, remote)
            .ok_or(LinkError::NoRemote)?;
        RemoteDescriptor::parse(&url).ok_or(LinkError::RemoteParse { url })
    }

    /// Hash of the checked-out commit.
    pub fn revision(&self) -> Result<String, LinkError> {
        self.vcs.head(self.root).ok_or(LinkError::NoCommit)
    }

    /// Warn when no remote-tracking branch of `remote` contains `rev`.
    pub fn check_pushed(&self, remote: &str, rev: &str) -> Option<SyncWarning> {
        let branches = self
            .vcs
            .remote_branches_containing(self.root, rev)
            .unwrap_or_default();
        let pushed = branches
            .iter()
            .any(|branch| branch.split_once('/').is_some_and(|(name, _)| name == remote));
        if pushed {
            return None;
        }
        let warning = SyncWarning::NotPushed {
            remote: remote.to_string(),
        };
        log::warn!("{warning}");
        Some(warning)
    }

    /// Fail when `path` does not exist at `rev`.
    pub fn check_file(&self, rev: &str, path: &str) -> Result<(), LinkError> {
        if self.vcs.file_exists_at(self.root, rev, path) {
            Ok(())
        } else {
            Err(LinkError::FileNotInRemote {
                path: path.to_string(),
            })
        }
    }

    /// Warn when the working copy of `path` differs from `rev`.
    pub fn check_uncommitted(&self, rev: &str, path: &str) -> Option<SyncWarning> {
        let diff = self.vcs.diff(self.root, rev, path)?;
        if diff.trim().is_empty() {
            return None;
        }
        let warning = SyncWarning::UncommittedChanges {
            path: path.to_string(),
        };
        log::warn!("{warning}");
        Some(warning)
    }

    /// Run every step for `path`. The uncommitted-changes check only runs when
    /// `anchored` is set, since it only matters for line numbers.
    pub fn resolve(&self, path: &str, anchored: bool) -> Result<Resolution, LinkError> {
        let remote = self.remote()?;
        let descriptor = self.descriptor(&remote)?;
        let revision = self.revision()?;

        let mut warnings = Vec::new();
        warnings.extend(self.check_pushed(&remote, &revision));
        self.check_file(&revision, path)?;
        if anchored {
            warnings.extend(self.check_uncommitted(&revision, path));
        }

        Ok(Resolution {
            remote,
            descriptor,
            revision,
            warnings,
        })
    }
}
