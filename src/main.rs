//! treecascade CLI - tree table expand/collapse and tri-state checkbox engine
//!
//! Usage: treecascade <COMMAND>
//!
//! Commands:
//!   show      Print the tree table
//!   apply     Replay events and print the result (or NDJSON intents)
//!   validate  Check node records
//!   checked   Replay events and list ticked nodes
//!   browse    Browse the tree interactively

mod commands;
mod presentation;

use anyhow::Result;
use clap::Parser;

use presentation::cli::{Cli, Commands};
use presentation::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = UiContext::resolve(&cli)?;

    match &cli.command {
        Commands::Show { nodes } => commands::cmd_show(&ctx, nodes),
        Commands::Apply { nodes, events } => commands::cmd_apply(&ctx, nodes, events),
        Commands::Validate { nodes } => commands::cmd_validate(&ctx, nodes),
        Commands::Checked {
            nodes,
            events,
            kinds,
        } => commands::cmd_checked(&ctx, nodes, events, kinds),
        Commands::Browse { nodes } => commands::cmd_browse(&ctx, nodes),
    }
}
