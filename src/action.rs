//! Delivery of a finished URL: stdout, clipboard or browser.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;
use url::Url;

use crate::error::LinkError;

/// Clipboard programs, tried in order: (program, args).
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// What to do with a finished URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Write it to stdout.
    #[default]
    Print,
    /// Put it on the system clipboard.
    Copy,
    /// Open it in the default browser.
    Open,
}

/// Unknown action name.
#[derive(Debug, Error)]
#[error("Unknown action {0:?} (expected print, copy or open)")]
pub struct ParseActionError(String);

impl std::str::FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "print" => Ok(Self::Print),
            "copy" => Ok(Self::Copy),
            "open" => Ok(Self::Open),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Action {
    const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Copy => "copy",
            Self::Open => "open",
        }
    }

    /// Deliver `url`.
    pub fn perform(self, url: &str) -> Result<(), LinkError> {
        match self {
            Self::Print => {
                println!("{url}");
                Ok(())
            }
            Self::Copy => copy_to_clipboard(url).map_err(|message| self.failed(message)),
            Self::Open => open_in_browser(url).map_err(|message| self.failed(message)),
        }
    }

    fn failed(self, message: String) -> LinkError {
        LinkError::Action {
            action: self.name(),
            message,
        }
    }
}

fn copy_to_clipboard(url: &str) -> Result<(), String> {
    let (program, args) = CLIPBOARD_TOOLS
        .iter()
        .find(|(program, _)| which::which(program).is_ok())
        .ok_or_else(|| {
            "no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel, clip)".to_string()
        })?;

    log::debug!("copying with {program}");
    let mut child = Command::new(program)
        .args(*args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to spawn {program}: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(url.as_bytes())
            .map_err(|e| format!("failed to write to {program}: {e}"))?;
    }
    let status = child
        .wait()
        .map_err(|e| format!("failed to wait for {program}: {e}"))?;
    if !status.success() {
        return Err(format!("{program} exited with status {:?}", status.code()));
    }
    Ok(())
}

fn open_in_browser(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| format!("invalid URL {url}: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("refusing to open non-web URL {url}"));
    }

    let mut cmd = opener_command();
    cmd.arg(parsed.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to launch browser: {e}"))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener_command() -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command() -> Command {
    Command::new("xdg-open")
}
