//! Parsing of git remote URLs.

use regex::Regex;
use std::sync::LazyLock;


// Each path segment is non-empty and slash-free; one trailing `/` is dropped.
static SSH_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^@:/\s]+@(?P<host>[^:/\s]+):(?P<repo>[^/:\s]+(?:/[^/\s]+)+?)(?:\.git)?/?$",
    )
    .expect("ssh shorthand pattern is valid")
});

static HTTP_WITH_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?P<host>[^:/@\s]+):(?P<port>\d+)/(?P<repo>[^/\s]+(?:/[^/\s]+)+?)(?:\.git)?/?$",
    )
    .expect("http with port pattern is valid")
});

static HTTP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?P<host>[^:/@\s]+)/(?P<repo>[^/\s]+(?:/[^/\s]+)+?)(?:\.git)?/?$")
        .expect("http pattern is valid")
});

/// Host and repository identifiers extracted from a git remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Host name, taken verbatim from the URL.
    pub host: String,
    /// Explicit port of an HTTP(S) remote.
    pub port: Option<String>,
    /// `owner/name` (or nested `group/sub/name`), never ending in `.git`.
    pub repository: String,
}

impl RemoteDescriptor {
    /// Parse any of the supported remote shapes, first match wins:
    /// - `git@github.com:owner/repo.git`
    /// - `https://git.example.com:8443/owner/repo.git`
    /// - `https://github.com/owner/repo`
    ///
    /// The `.git` suffix is optional everywhere and a single trailing `/` is
    /// ignored. Empty path segments or anything else yields `None`.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        Self::parse_shapes(url).filter(|r| !r.repository.ends_with(".git"))
    }

    fn parse_shapes(url: &str) -> Option<Self> {
        if let Some(caps) = SSH_SHORTHAND.captures(url) {
            return Some(Self {
                host: caps["host"].to_string(),
                port: None,
                repository: caps["repo"].to_string(),
            });
        }

        if let Some(caps) = HTTP_WITH_PORT.captures(url) {
            return Some(Self {
                host: caps["host"].to_string(),
                port: Some(caps["port"].to_string()),
                repository: caps["repo"].to_string(),
            });
        }

        let caps = HTTP.captures(url)?;
        Some(Self {
            host: caps["host"].to_string(),
            port: None,
            repository: caps["repo"].to_string(),
        })
    }

    /// `https://host[:port]/`, the prefix shared by every generated link.
    #[must_use]
    pub fn base_url(&self) -> String {
        base_url(&self.host, self.port.as_deref())
    }
}

pub(crate) fn base_url(host: &str, port: Option<&str>) -> String {
    match port {
        Some(port) => format!("https://{host}:{port}/"),
        None => format!("https://{host}/"),
    }
}
