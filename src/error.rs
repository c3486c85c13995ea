//! Fatal errors and non-fatal warnings raised while building a link.

use thiserror::Error;

/// Broad category of a [`LinkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No file, or the file is not inside a working tree.
    Context,
    /// No usable remote, or its URL could not be parsed.
    Remote,
    /// The checked-out commit could not be determined.
    Revision,
    /// The file does not exist at the resolved revision.
    Lookup,
    /// No host rule matched, or a rule is malformed.
    Host,
    /// The finished URL could not be delivered.
    Action,
}

/// A terminal failure while building a link. Nothing is delivered once one of
/// these is returned.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The caller did not supply a file.
    #[error("no file associated with current context")]
    NoFile,

    /// The file is not inside a git working tree.
    #[error("not inside a version-controlled tree")]
    NotInRepository,

    /// No remote is configured, or the chosen one has no URL.
    #[error("no remote found")]
    NoRemote,

    /// The remote URL has a shape the parser does not recognise.
    #[error("failed to parse remote URL: {url}")]
    RemoteParse {
        /// The URL as reported by git.
        url: String,
    },

    /// `HEAD` could not be resolved.
    #[error("failed to get commit hash")]
    NoCommit,

    /// The file does not exist at the resolved commit.
    #[error("file not in remote: {path}")]
    FileNotInRemote {
        /// Repository-relative path.
        path: String,
    },

    /// No host rule matched the remote's host.
    #[error("no URL generator matched host {host}")]
    NoHostMatch {
        /// The host as parsed from the remote URL.
        host: String,
    },

    /// A host rule carries an invalid pattern.
    #[error("invalid host pattern {pattern:?}: {source}")]
    HostPattern {
        /// The offending pattern.
        pattern: String,
        /// Compilation error from the regex engine.
        source: regex::Error,
    },

    /// The configured action failed.
    #[error("failed to {action} URL: {message}")]
    Action {
        /// Action name (`copy`, `open`, ...).
        action: &'static str,
        /// What went wrong.
        message: String,
    },
}

impl LinkError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFile | Self::NotInRepository => ErrorKind::Context,
            Self::NoRemote | Self::RemoteParse { .. } => ErrorKind::Remote,
            Self::NoCommit => ErrorKind::Revision,
            Self::FileNotInRemote { .. } => ErrorKind::Lookup,
            Self::NoHostMatch { .. } | Self::HostPattern { .. } => ErrorKind::Host,
            Self::Action { .. } => ErrorKind::Action,
        }
    }
}

/// A condition that may make the link point at the wrong content. Reported,
/// never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// No remote-tracking branch of `remote` contains the commit.
    NotPushed {
        /// The remote that was checked.
        remote: String,
    },
    /// The working copy of `path` differs from the commit.
    UncommittedChanges {
        /// Repository-relative path.
        path: String,
    },
}

impl std::fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPushed { remote } => {
                write!(f, "commit not in remote {remote} - push changes first")
            }
            Self::UncommittedChanges { path } => {
                write!(f, "{path} has uncommitted changes - line numbers may be wrong")
            }
        }
    }
}
