//! Permalinks to files and line ranges on git hosting providers.

pub mod action;
pub mod config;
pub mod error;
pub mod hosts;
pub mod link;
pub mod remote;
pub mod resolver;
pub mod vcs;

pub use config::Config;
pub use error::{ErrorKind, LinkError, SyncWarning};
pub use link::{generate_range_link, generate_repo_link, LinkContext, Selection};
pub use vcs::Git;
