//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Resolving config, logging and terminal capabilities per invocation
//! - Output formatting (text/JSON)

pub mod cli;
pub mod context;
pub mod logging;
pub mod output;
