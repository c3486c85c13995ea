//! Configuration file and per-call overrides.

mod merge;
mod ops;


use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::hosts::HostStyle;

pub use merge::ConfigOverride;

/// User configuration, read from `~/.config/gitlink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote selection.
    pub remote: RemoteConfig,
    /// Link shape and delivery.
    pub link: LinkConfig,
    /// Extra host rules, checked in order before the built-in ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostRule>,
}

/// `[remote]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Always use this remote instead of detecting one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `[link]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Anchor the cursor line when no range is selected.
    pub include_line_in_point_mode: bool,
    /// What to do with the finished URL.
    pub action: Action,
}

/// A `[[hosts]]` entry mapping a host regex to a URL style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRule {
    /// Regex matched against the remote's host, e.g. `^git\.example\.com$`.
    pub pattern: String,
    /// URL layout used for matching hosts.
    pub style: HostStyle,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            include_line_in_point_mode: true,
            action: Action::default(),
        }
    }
}
