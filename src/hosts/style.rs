use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{Formatter, LineRange, LinkRequest};
use crate::remote::base_url;

/// URL layout of a family of hosting providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStyle {
    /// `{repo}/blob/{rev}/{file}#L1-L2`
    GitHub,
    /// `{repo}/-/blob/{rev}/{file}#L1-2`
    GitLab,
    /// Gitea and Forgejo: `{repo}/src/commit/{rev}/{file}#L1-L2`
    Gitea,
    /// `{repo}/src/{rev}/{file}#lines-1:2`
    BitBucket,
    /// `{repo}.git/tree/{file}?id={rev}#n1`
    Cgit,
    /// `{repo}/tree/{rev}/item/{file}#L1-2`
    SourceHut,
}

impl HostStyle {
    /// Render `req` in this style.
    #[must_use]
    pub fn format(self, req: &LinkRequest) -> String {
        let base = base_url(&req.host, req.port.as_deref());
        let repo = match self {
            Self::Cgit => with_git_suffix(&req.repository),
            _ => req.repository.clone(),
        };

        let (Some(rev), Some(file)) = (req.revision.as_deref(), req.file.as_deref()) else {
            return format!("{base}{repo}");
        };

        let path = match self {
            Self::GitHub => format!("{repo}/blob/{rev}/{file}"),
            Self::GitLab => format!("{repo}/-/blob/{rev}/{file}"),
            Self::Gitea => format!("{repo}/src/commit/{rev}/{file}"),
            Self::BitBucket => format!("{repo}/src/{rev}/{file}"),
            Self::Cgit => format!("{repo}/tree/{file}?id={rev}"),
            Self::SourceHut => format!("{repo}/tree/{rev}/item/{file}"),
        };
        let anchor = req.lines.map(|lines| self.anchor(lines)).unwrap_or_default();

        format!("{base}{path}{anchor}")
    }

    fn anchor(self, lines: LineRange) -> String {
        let (start, end) = (lines.start(), lines.end());
        if lines.is_single() {
            return match self {
                Self::GitHub | Self::GitLab | Self::Gitea | Self::SourceHut => format!("#L{start}"),
                Self::BitBucket => format!("#lines-{start}"),
                Self::Cgit => format!("#n{start}"),
            };
        }
        match self {
            Self::GitHub | Self::Gitea => format!("#L{start}-L{end}"),
            Self::GitLab | Self::SourceHut => format!("#L{start}-{end}"),
            Self::BitBucket => format!("#lines-{start}:{end}"),
            // cgit has no range syntax
            Self::Cgit => format!("#n{start}"),
        }
    }

    /// Boxed formatter for this style, for use in a [`super::HostRegistry`].
    #[must_use]
    pub fn formatter(self) -> Formatter {
        Arc::new(move |req: &LinkRequest| self.format(req))
    }
}

impl std::fmt::Display for HostStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Gitea => "gitea",
            Self::BitBucket => "bitbucket",
            Self::Cgit => "cgit",
            Self::SourceHut => "sourcehut",
        };
        f.write_str(name)
    }
}

fn with_git_suffix(repository: &str) -> String {
    if repository.ends_with(".git") {
        repository.to_string()
    } else {
        format!("{repository}.git")
    }
}
