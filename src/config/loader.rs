//! Configuration file loading with precedence handling.

use crate::model::ApiKey;
use crate::omdb::DEFAULT_API_URL;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "REELFIND_CONFIG";

/// Environment variable carrying the OMDb API key.
pub const ENV_API_KEY: &str = "OMDB_API_KEY";

/// Environment variable overriding the search endpoint.
pub const ENV_API_URL: &str = "REELFIND_API_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// No layer supplied an API key.
    #[error("No OMDb API key configured (set api_key in the config file, OMDB_API_KEY, or --api-key)")]
    MissingApiKey,
}

/// Where the page-1 loading indicator is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPlacement {
    /// Centered popup over the result list.
    #[default]
    Overlay,
    /// Single row below the result list, like later pages.
    Inline,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/reelfind/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// OMDb API key literal.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search endpoint base URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Query searched at startup.
    #[serde(default)]
    pub initial_query: Option<String>,

    /// Input inactivity before a query is searched, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Rows from the bottom at which the next page is requested.
    #[serde(default)]
    pub scroll_threshold: Option<u16>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Placement of the first-page loading indicator.
    #[serde(default)]
    pub first_page_loading: Option<LoadingPlacement>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Reject durations of zero, matching the CLI's `--debounce-ms` range.
    fn validate(&self) -> Result<(), String> {
        if self.debounce_ms == Some(0) {
            return Err("debounce_ms must be at least 1".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API key, if any layer supplied one.
    pub api_key: Option<ApiKey>,
    /// Search endpoint base URL.
    pub api_url: String,
    /// Query searched at startup.
    pub initial_query: String,
    /// Debounce delay.
    pub debounce: Duration,
    /// Near-bottom threshold in rows.
    pub scroll_threshold: u16,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// First-page loading indicator placement.
    pub first_page_loading: LoadingPlacement,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            initial_query: "Batman".to_string(),
            debounce: Duration::from_millis(500),
            scroll_threshold: 2,
            request_timeout: Duration::from_secs(10),
            first_page_loading: LoadingPlacement::Overlay,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// The API key, or [`ConfigError::MissingApiKey`].
    pub fn require_api_key(&self) -> Result<ApiKey, ConfigError> {
        self.api_key.clone().ok_or(ConfigError::MissingApiKey)
    }
}

/// CLI flags that override every other layer when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--query`
    pub initial_query: Option<String>,
    /// `--api-key`
    pub api_key: Option<String>,
    /// `--api-url`
    pub api_url: Option<String>,
    /// `--debounce-ms`
    pub debounce_ms: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/reelfind/reelfind.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("reelfind").join("reelfind.log")
    } else {
        PathBuf::from("reelfind.log")
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

    config.validate().map_err(|reason| ConfigError::ParseError {
        path: path.clone(),
        reason,
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/reelfind/config.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reelfind").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `REELFIND_CONFIG` environment variable
/// 3. Default path
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_key: config.api_key.and_then(ApiKey::new).or(defaults.api_key),
        api_url: config.api_url.unwrap_or(defaults.api_url),
        initial_query: config.initial_query.unwrap_or(defaults.initial_query),
        debounce: config
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce),
        scroll_threshold: config.scroll_threshold.unwrap_or(defaults.scroll_threshold),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        first_page_loading: config
            .first_page_loading
            .unwrap_or(defaults.first_page_loading),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides from the process environment.
///
/// Checks `OMDB_API_KEY` and `REELFIND_API_URL`. Call after `.env` has been
/// loaded so its values participate.
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply environment overrides using `lookup` as the environment.
pub fn apply_env_overrides_from(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    if let Some(key) = lookup(ENV_API_KEY).and_then(ApiKey::new) {
        config.api_key = Some(key);
    }

    if let Some(url) = lookup(ENV_API_URL).filter(|url| !url.trim().is_empty()) {
        config.api_url = url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(query) = cli.initial_query {
        config.initial_query = query;
    }

    if let Some(key) = cli.api_key.and_then(ApiKey::new) {
        config.api_key = Some(key);
    }

    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    if let Some(ms) = cli.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
