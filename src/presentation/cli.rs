//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --ascii, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treecascade::Event;

/// treecascade - expand/collapse and tri-state checkbox engine for tree tables
#[derive(Parser, Debug)]
#[command(name = "treecascade")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Events: toggle:<id>, check:<id>, uncheck:<id>, expand-all, collapse-all")]
pub struct Cli {
    /// Configuration file (defaults to ./treecascade.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for scripts and hosts
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load node records and print the tree table
    Show {
        /// JSON file with node records (`-` for stdin)
        nodes: PathBuf,
    },

    /// Replay events and print the resulting table (or stream intents with --json)
    Apply {
        /// JSON file with node records (`-` for stdin)
        nodes: PathBuf,

        /// Events to replay in order
        #[arg(value_name = "EVENT")]
        events: Vec<Event>,
    },

    /// Check node records for duplicates, missing parents and cycles
    Validate {
        /// JSON file with node records (`-` for stdin)
        nodes: PathBuf,
    },

    /// Replay events and print the ids of ticked nodes
    Checked {
        /// JSON file with node records (`-` for stdin)
        nodes: PathBuf,

        /// Events to replay in order
        #[arg(value_name = "EVENT")]
        events: Vec<Event>,

        /// Only report nodes of this type (repeatable)
        #[arg(long = "kind", value_name = "KIND")]
        kinds: Vec<String>,
    },

    /// Browse the tree interactively
    Browse {
        /// JSON file with node records
        nodes: PathBuf,
    },
}
