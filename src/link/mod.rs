//! End-to-end link generation: capture the selection, resolve the remote and
//! revision, render with the matching host formatter, deliver.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::error::{LinkError, SyncWarning};
use crate::hosts::{HostRegistry, LineRange, LinkRequest};
use crate::resolver::Resolver;
use crate::vcs::VcsQuery;


/// Where the caller's cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No explicit range; `cursor` is the current line, if known.
    Point {
        /// 1-based cursor line.
        cursor: Option<u32>,
    },
    /// An explicit range between `anchor` and `cursor`, in either order.
    Range {
        /// Line where the selection started.
        anchor: u32,
        /// Line where the selection ends.
        cursor: u32,
    },
}

/// File, repository and line range captured up front, before any git query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    /// File to link to.
    pub file: Option<PathBuf>,
    /// Root of the working tree containing `file`.
    pub repo_root: Option<PathBuf>,
    /// Line anchor to emit.
    pub lines: Option<LineRange>,
}

impl LinkContext {
    /// Freeze the selection into a line range. In point mode the cursor line is
    /// kept only when the config asks for it.
    #[must_use]
    pub fn capture(
        file: Option<PathBuf>,
        repo_root: Option<PathBuf>,
        selection: Selection,
        config: &Config,
    ) -> Self {
        let lines = match selection {
            Selection::Point { cursor } if config.link.include_line_in_point_mode => {
                cursor.and_then(LineRange::single)
            }
            Selection::Point { .. } => None,
            Selection::Range { anchor, cursor } => LineRange::new(anchor, cursor),
        };
        Self {
            file,
            repo_root,
            lines,
        }
    }
}

/// A generated URL and the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The permalink.
    pub url: String,
    /// Reasons the link may not show what the caller sees locally.
    pub warnings: Vec<SyncWarning>,
}

/// Runs the resolve → format pipeline against one config snapshot.
pub struct Linker<'a> {
    vcs: &'a dyn VcsQuery,
    config: Config,
    registry: HostRegistry,
}

impl<'a> Linker<'a> {
    /// Build the host registry for `config`. Fails on an invalid host pattern.
    pub fn new(vcs: &'a dyn VcsQuery, config: Config) -> Result<Self, LinkError> {
        let registry = HostRegistry::with_rules(&config.hosts)?;
        Ok(Self {
            vcs,
            config,
            registry,
        })
    }

    /// Replace the host registry, e.g. with one holding custom formatters.
    #[must_use]
    pub fn with_registry(mut self, registry: HostRegistry) -> Self {
        self.registry = registry;
        self
    }

    fn resolver<'b>(&'b self, root: &'b Path) -> Resolver<'b> {
        Resolver::new(self.vcs, root, self.config.remote.name.as_deref())
    }

    /// Permalink to the captured file and lines.
    pub fn range_link(&self, ctx: &LinkContext) -> Result<Link, LinkError> {
        let file = ctx.file.as_deref().ok_or(LinkError::NoFile)?;
        let root = ctx.repo_root.as_deref().ok_or(LinkError::NotInRepository)?;
        let path = relative_path(root, file).ok_or(LinkError::NotInRepository)?;

        let resolution = self.resolver(root).resolve(&path, ctx.lines.is_some())?;
        let descriptor = resolution.descriptor;
        let request = LinkRequest {
            host: descriptor.host,
            port: descriptor.port,
            repository: descriptor.repository,
            revision: Some(resolution.revision),
            file: Some(path),
            lines: ctx.lines,
        };

        Ok(Link {
            url: self.registry.format(&request)?,
            warnings: resolution.warnings,
        })
    }

    /// URL of the repository itself; no revision, file or line lookups.
    pub fn repo_link(&self, repo_root: Option<&Path>) -> Result<Link, LinkError> {
        let root = repo_root.ok_or(LinkError::NotInRepository)?;
        let resolver = self.resolver(root);
        let remote = resolver.remote()?;
        let descriptor = resolver.descriptor(&remote)?;
        let request = LinkRequest {
            host: descriptor.host,
            port: descriptor.port,
            repository: descriptor.repository,
            revision: None,
            file: None,
            lines: None,
        };

        Ok(Link {
            url: self.registry.format(&request)?,
            warnings: Vec::new(),
        })
    }
}

/// Generate the permalink for `ctx` and hand it to the configured action.
pub fn generate_range_link(
    vcs: &dyn VcsQuery,
    ctx: &LinkContext,
    config: &Config,
) -> Result<Link, LinkError> {
    let link = Linker::new(vcs, config.clone())?.range_link(ctx)?;
    config.link.action.perform(&link.url)?;
    Ok(link)
}

/// Generate the repository URL for `repo_root` and hand it to the configured
/// action.
pub fn generate_repo_link(
    vcs: &dyn VcsQuery,
    repo_root: Option<&Path>,
    config: &Config,
) -> Result<Link, LinkError> {
    let link = Linker::new(vcs, config.clone())?.repo_link(repo_root)?;
    config.link.action.perform(&link.url)?;
    Ok(link)
}

/// `file` relative to `root`, joined with `/`. A relative `file` is taken to be
/// relative to `root` already. `None` when `file` lies outside `root`.
fn relative_path(root: &Path, file: &Path) -> Option<String> {
    let relative = if file.is_absolute() {
        file.strip_prefix(root).ok()?
    } else {
        file
    };

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
