//! Configuration file loading with precedence handling.

use crate::model::{Locale, DEFAULT_TIP_PERCENT};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TIPTIME_CONFIG";

/// Environment variable overriding the currency locale.
pub const LOCALE_ENV_VAR: &str = "TIPTIME_LOCALE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tiptime/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Currency locale tag (e.g., "en-US", "de_DE.UTF-8").
    #[serde(default)]
    pub locale: Option<String>,

    /// Tip percentage used when a one-shot run omits `--tip`.
    #[serde(default)]
    pub default_tip_percent: Option<f64>,

    /// Start with the round-up switch on.
    #[serde(default)]
    pub round_up: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Locale whose currency conventions are used.
    pub locale: Locale,
    /// Tip percentage for standalone invocations without a tip.
    pub default_tip_percent: Decimal,
    /// Initial round-up switch state.
    pub round_up: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            locale: Locale::detect(),
            default_tip_percent: DEFAULT_TIP_PERCENT,
            round_up: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tiptime/tiptime.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tiptime").join("tiptime.log")
    } else {
        PathBuf::from("tiptime.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tiptime/config.toml` on Linux, the platform equivalent
/// elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tiptime").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TIPTIME_CONFIG` environment variable
/// 3. Default path `~/.config/tiptime/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// Unusable values (an unknown locale tag, a non-finite tip) are logged and
/// replaced by the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let locale = match config.locale.as_deref() {
        Some(tag) => Locale::parse(tag).unwrap_or_else(|| {
            warn!(locale = tag, "Ignoring unparsable locale in config file");
            defaults.locale.clone()
        }),
        None => defaults.locale.clone(),
    };

    let default_tip_percent = match config.default_tip_percent {
        Some(value) => Decimal::try_from(value).unwrap_or_else(|_| {
            warn!(value, "Ignoring unusable default_tip_percent in config file");
            defaults.default_tip_percent
        }),
        None => defaults.default_tip_percent,
    };

    ResolvedConfig {
        locale,
        default_tip_percent,
        round_up: config.round_up.unwrap_or(defaults.round_up),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TIPTIME_LOCALE`: Override the currency locale
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`apply_env_overrides`], reading variables through `lookup`.
pub fn apply_env_overrides_from(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    if let Some(tag) = lookup(LOCALE_ENV_VAR) {
        match Locale::parse(&tag) {
            Some(locale) => config.locale = locale,
            None => warn!(locale = %tag, "Ignoring unparsable {LOCALE_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    locale_override: Option<Locale>,
    round_up_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(locale) = locale_override {
        config.locale = locale;
    }

    if let Some(round_up) = round_up_override {
        config.round_up = round_up;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
