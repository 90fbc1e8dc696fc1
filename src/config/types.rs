//! Configuration type definitions

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CascadeError, CascadeResult};

use super::loader::{self, ConfigWarning};

/// Tree behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreeConfig {
    /// Entity kinds that carry a tri-state checkbox; empty means every kind
    #[serde(default)]
    pub checkable_kinds: Vec<String>,

    /// Start with every toggler collapsed instead of expanded
    #[serde(default)]
    pub initially_collapsed: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Spaces per tree level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
            indent: default_indent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CascadeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CascadeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (TREECASCADE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the engine and renderer cannot work with
    pub fn validate(&self) -> CascadeResult<()> {
        if !(1..=8).contains(&self.output.indent) {
            return Err(CascadeError::InvalidConfig {
                message: format!(
                    "output.indent must be between 1 and 8, got {}",
                    self.output.indent
                ),
            });
        }

        let mut seen = HashSet::new();
        for kind in &self.tree.checkable_kinds {
            if kind.trim().is_empty() {
                return Err(CascadeError::InvalidConfig {
                    message: "tree.checkable_kinds contains an empty kind".to_string(),
                });
            }
            if !seen.insert(kind.as_str()) {
                return Err(CascadeError::InvalidConfig {
                    message: format!("tree.checkable_kinds lists '{}' twice", kind),
                });
            }
        }

        Ok(())
    }

    /// Whether rows of `kind` carry a checkbox
    pub fn is_checkable(&self, kind: &str) -> bool {
        self.tree.checkable_kinds.is_empty() || self.tree.checkable_kinds.iter().any(|k| k == kind)
    }
}
