use super::{Config, HostRule};
use crate::action::Action;

/// Per-invocation overrides. `None` fields leave the base value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverride {
    /// Force this remote.
    pub remote: Option<String>,
    /// Anchor the cursor line in point mode.
    pub include_line_in_point_mode: Option<bool>,
    /// Deliver the URL this way.
    pub action: Option<Action>,
    /// Host rules checked before the base config's rules.
    pub hosts: Vec<HostRule>,
}

impl Config {
    /// A new snapshot with `overrides` applied on top of `self`.
    #[must_use]
    pub fn merged(&self, overrides: &ConfigOverride) -> Self {
        let mut config = self.clone();
        if let Some(remote) = &overrides.remote {
            config.remote.name = Some(remote.clone());
        }
        if let Some(include) = overrides.include_line_in_point_mode {
            config.link.include_line_in_point_mode = include;
        }
        if let Some(action) = overrides.action {
            config.link.action = action;
        }
        if !overrides.hosts.is_empty() {
            config.hosts = overrides
                .hosts
                .iter()
                .chain(&self.hosts)
                .cloned()
                .collect();
        }
        config
    }
}
