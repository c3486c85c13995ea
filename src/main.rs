//! `gitlink` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigAction;
use gitlink::action::Action;
use gitlink::config::ConfigOverride;

#[derive(Parser)]
#[command(name = "gitlink", about = "Generate permalinks to files and line ranges on git hosts")]
struct Cli {
    /// Use this remote instead of detecting one
    #[arg(long, global = true, value_name = "NAME")]
    remote: Option<String>,

    /// What to do with the generated URL
    #[arg(long, global = true, value_enum)]
    action: Option<Action>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link to a file, optionally anchored at a line or line range
    File {
        /// File inside a git working tree
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Current line (used unless link.include_line_in_point_mode is false)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        line: Option<u32>,

        /// Selected range, e.g. 10:20 or 20-10
        #[arg(short, long, value_parser = commands::link::parse_range, conflicts_with = "line")]
        range: Option<(u32, u32)>,

        /// Never anchor a line in point mode
        #[arg(long)]
        no_line: bool,
    },

    /// Link to the repository itself
    Repo {
        /// Directory inside the working tree (defaults to the current directory)
        #[arg(short = 'C', long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Manage gitlink configuration
    Config {
        #[command(subcommand)]
        command: ConfigAction,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("GITLINK_LOG", "warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverride {
        remote: cli.remote,
        action: cli.action,
        ..ConfigOverride::default()
    };

    match cli.command {
        Commands::File {
            path,
            line,
            range,
            no_line,
        } => commands::link::cmd_file(&path, line, range, no_line, overrides),

        Commands::Repo { dir } => commands::link::cmd_repo(dir, &overrides),

        Commands::Config { command } => commands::config::cmd_config(command),
    }
}
