//! Subcommand handlers for the `gitlink` binary.

pub mod config;
pub mod link;
