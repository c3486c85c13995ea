//! `gitlink config`: inspect and edit `~/.config/gitlink/config.toml`.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fmt::Write as _;
use std::path::Path;

use gitlink::config::Config;
use gitlink::hosts::{builtin_rules, HostRegistry};

/// Subcommands of `gitlink config`.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configuration and the host rules in match order
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Set a configuration value (e.g. link.action copy)
    Set {
        /// Dot-separated key, e.g. remote.name
        key: String,
        /// New value; an empty remote.name clears it
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Dot-separated key, e.g. link.action
        key: String,
    },
}

/// Run one `gitlink config` subcommand against the user's config file.
pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", render(&config)?);
        }
        ConfigAction::Path => {
            let path = Config::path()?;
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            let path = Config::path()?;
            init_at(&path, force)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}

/// The config as TOML, followed by the effective host rules as comments:
/// `[[hosts]]` entries first, then the built-in ones. Fails on a bad pattern.
fn render(config: &Config) -> Result<String> {
    HostRegistry::with_rules(&config.hosts).context("Invalid [[hosts]] entry")?;

    let mut out = toml::to_string_pretty(config).context("Failed to serialize config")?;
    out.push_str("\n# Host rules (first match wins):\n");
    let builtin = builtin_rules();
    let rules = config
        .hosts
        .iter()
        .map(|rule| ("config", rule))
        .chain(builtin.iter().map(|rule| ("builtin", rule)));
    for (i, (origin, rule)) in rules.enumerate() {
        let style = rule.style.to_string();
        writeln!(out, "# {:>2}. {origin:<7} {style:<9} {}", i + 1, rule.pattern)?;
    }
    Ok(out)
}

/// Write the default config to `path`. An existing file is kept unless `force`.
fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
