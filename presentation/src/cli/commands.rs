//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quotebook
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(author, version, about = "Quote collection with categories, import/export and remote sync")]
#[command(long_about = r#"
Quotebook keeps a collection of quotes, shows a random one for the selected
category, and periodically merges quotes from a remote endpoint.

Without a subcommand, an interactive session is started and sync runs in the
background every `sync.interval_seconds` (default 30).

Configuration files are loaded from (in priority order):
1. QUOTEBOOK_* environment variables
2. --config <path>        Explicit config file
3. ./quotebook.toml       Project-level config
4. ~/.config/quotebook/config.toml   Global config

Example:
  quotebook show
  quotebook add "Simplicity is the soul of efficiency." Efficiency
  quotebook filter Efficiency
  quotebook export --output backup.json
  quotebook import backup.json
  quotebook sync
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory holding the quote storage (overrides storage.data_dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only print quotes and errors, no success notices
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// The subcommand to run, defaulting to an interactive session
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive { no_sync: false })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a random quote from the selected category
    Show {
        /// Pick from this category instead, without changing the selection
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote
    Add {
        /// Quote text
        text: String,
        /// Quote category
        category: String,
    },

    /// List categories, marking the selected one
    Categories,

    /// Select a category ("all" for no restriction) and show a quote from it
    Filter {
        /// Category name or "all"
        category: String,
    },

    /// Export all quotes as pretty-printed JSON
    Export {
        /// Output file
        #[arg(short, long, value_name = "PATH", default_value = "quotes.json")]
        output: PathBuf,

        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Append quotes from a JSON file
    Import {
        /// File containing a JSON array of {"text", "category"} objects
        file: PathBuf,
    },

    /// Run one sync cycle against the remote endpoint
    Sync,

    /// Start an interactive session (default)
    Interactive {
        /// Do not run periodic sync in the background
        #[arg(long)]
        no_sync: bool,
    },
}
