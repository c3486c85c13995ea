//! Host-specific link synthesis.
//!
//! A [`HostRegistry`] is an ordered list of `(pattern, formatter)` rules. The
//! first rule whose pattern matches the remote's host renders the link.

use regex::Regex;
use std::sync::Arc;

use crate::config::HostRule;
use crate::error::LinkError;

mod style;

#[cfg(test)]
mod tests;

pub use style::HostStyle;

/// Renders a [`LinkRequest`] into a complete URL. Must not perform I/O.
pub type Formatter = Arc<dyn Fn(&LinkRequest) -> String + Send + Sync>;

/// Built-in rules, checked after every user rule.
const BUILTIN_RULES: &[(&str, HostStyle)] = &[
    (r"^github\.com$", HostStyle::GitHub),
    (r"^gitlab\.com$", HostStyle::GitLab),
    (r"^(codeberg\.org|gitea\.com|try\.gitea\.io)$", HostStyle::Gitea),
    (r"^bitbucket\.org$", HostStyle::BitBucket),
    (r"^git\.sr\.ht$", HostStyle::SourceHut),
    (
        r"^(git\.kernel\.org|git\.savannah\.gnu\.org|repo\.or\.cz|git\.zx2c4\.com)$",
        HostStyle::Cgit,
    ),
];

/// The built-in rules as config entries, in match order.
#[must_use]
pub fn builtin_rules() -> Vec<HostRule> {
    BUILTIN_RULES
        .iter()
        .map(|&(pattern, style)| HostRule {
            pattern: pattern.to_string(),
            style,
        })
        .collect()
}

/// An inclusive, 1-based line selection with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Range spanning `a` and `b` in either order. `None` if either is zero.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Option<Self> {
        if a == 0 || b == 0 {
            return None;
        }
        Some(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    /// A single line. `None` for line zero.
    #[must_use]
    pub fn single(line: u32) -> Option<Self> {
        Self::new(line, line)
    }

    /// First line.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Last line.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// True when the range covers exactly one line.
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.start == self.end
    }
}

/// Everything a formatter needs to build a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    /// Host as parsed from the remote URL.
    pub host: String,
    /// Explicit port, if the remote carried one.
    pub port: Option<String>,
    /// `owner/name`, without `.git`.
    pub repository: String,
    /// Commit to link against. Absent for repository links.
    pub revision: Option<String>,
    /// Repository-relative, `/`-separated path. Absent for repository links.
    pub file: Option<String>,
    /// Line anchor. Absent for whole-file links.
    pub lines: Option<LineRange>,
}

struct HostEntry {
    pattern: Regex,
    formatter: Formatter,
}

/// Ordered pattern → formatter rules. First match wins.
#[derive(Default)]
pub struct HostRegistry {
    entries: Vec<HostEntry>,
}

impl std::fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.pattern.as_str()))
            .finish()
    }
}

impl HostRegistry {
    /// A registry with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules only.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.extend_builtin();
        registry
    }

    /// `rules` in order, followed by the built-in rules.
    pub fn with_rules(rules: &[HostRule]) -> Result<Self, LinkError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.push(&rule.pattern, rule.style.formatter())?;
        }
        registry.extend_builtin();
        Ok(registry)
    }

    fn extend_builtin(&mut self) {
        for &(pattern, style) in BUILTIN_RULES {
            self.entries.push(HostEntry {
                pattern: Regex::new(pattern).expect("built-in host pattern is valid"),
                formatter: style.formatter(),
            });
        }
    }

    /// Append a rule. It is checked after every rule already present.
    pub fn push(&mut self, pattern: &str, formatter: Formatter) -> Result<(), LinkError> {
        let pattern = Regex::new(pattern).map_err(|source| LinkError::HostPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.entries.push(HostEntry { pattern, formatter });
        Ok(())
    }

    /// Formatter of the first rule matching `host`.
    #[must_use]
    pub fn find(&self, host: &str) -> Option<&Formatter> {
        let entry = self.entries.iter().find(|e| e.pattern.is_match(host))?;
        log::debug!("host {host} matched pattern {}", entry.pattern.as_str());
        Some(&entry.formatter)
    }

    /// Render `req` with the first matching rule.
    pub fn format(&self, req: &LinkRequest) -> Result<String, LinkError> {
        let formatter = self.find(&req.host).ok_or_else(|| LinkError::NoHostMatch {
            host: req.host.clone(),
        })?;
        Ok(formatter(req))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
