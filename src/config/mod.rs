//! Configuration module for treecascade
//!
//! Configuration hierarchy:
//! 1. `--config` flag (highest priority)
//! 2. Environment variables (TREECASCADE_*), applied on top of any file
//! 3. Project config (./treecascade.toml)
//! 4. User config (~/.config/treecascade/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    resolve, user_config_path, with_env_overrides_from, ConfigSource, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, TreeConfig, Verbosity};
