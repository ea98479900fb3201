//! Command-line interface definitions for the news directory.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use directory_core::ALL_CATEGORIES;

/// Browse, search, and publish a directory of news websites.
///
/// ```sh
/// # Interactive browser (the default)
/// directory
///
/// # One-shot listing
/// directory list --search public --category US
///
/// # Write the static page to ./public
/// directory export --out public
/// ```
#[derive(Parser, Debug)]
#[command(name = "directory", author, version, about)]
pub struct Cli {
    /// Path to the RON config file
    #[arg(short, long, global = true, default_value = "directory.ron")]
    pub config: PathBuf,

    /// Log file, overriding the config
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal browser
    Browse(QueryArgs),
    /// Print the channels matching a query
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the static single-page directory
    Export {
        /// Output directory, overriding the config
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Skip writing channels.json
        #[arg(long)]
        no_manifest: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// Initial search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Initial category (case-sensitive)
    #[arg(short = 'k', long, default_value = ALL_CATEGORIES)]
    pub category: String,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl Cli {
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Browse(QueryArgs::default()))
    }
}
