//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CascadeError, CascadeResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "treecascade.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CascadeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> CascadeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CascadeError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must load; otherwise `./treecascade.toml`, then the user
/// config directory, then built-in defaults. Environment overrides and
/// validation apply in every case.
pub fn resolve(
    explicit: Option<&Path>,
    cwd: &Path,
) -> CascadeResult<(Config, Vec<ConfigWarning>, ConfigSource)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            let user = user_config_path();
            if project.is_file() {
                Some(project)
            } else {
                user.filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings, source) = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, warnings, ConfigSource::File(path))
        }
        None => (Config::default(), Vec::new(), ConfigSource::Defaults),
    };

    let config = with_env_overrides(config);
    config.validate()?;
    Ok((config, warnings, source))
}

/// Apply environment variable overrides (TREECASCADE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Same as [`with_env_overrides`] with an injectable environment and warning writer
pub fn with_env_overrides_from<W: std::io::Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    const BOOLS: &[&str] = &["true", "false", "1", "0"];
    const LEVELS: &[&str] = &["quiet", "normal", "verbose", "debug"];

    if let Some(value) = get_env("TREECASCADE_UNICODE") {
        config.output.unicode = EnvVarValidator::new("TREECASCADE_UNICODE", BOOLS).parse_with_writer(
            &value,
            parse_bool,
            config.output.unicode,
            warnings,
        );
    }

    if let Some(value) = get_env("TREECASCADE_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new("TREECASCADE_VERBOSITY", LEVELS)
            .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, warnings);
    }

    if let Some(value) = get_env("TREECASCADE_INITIALLY_COLLAPSED") {
        config.tree.initially_collapsed = EnvVarValidator::new(
            "TREECASCADE_INITIALLY_COLLAPSED",
            BOOLS,
        )
        .parse_with_writer(&value, parse_bool, config.tree.initially_collapsed, warnings);
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// `$XDG_CONFIG_HOME/treecascade/config.toml` (platform config dir elsewhere)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("treecascade").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "checkable_kinds",
        "initially_collapsed",
        "output",
        "verbosity",
        "unicode",
        "indent",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
