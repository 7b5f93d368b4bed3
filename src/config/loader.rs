//! Configuration file loading with precedence handling.

use super::DragConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ROWDRAG_CONFIG";

/// Environment variable overriding the number of generated rows.
pub const ROWS_ENV_VAR: &str = "ROWDRAG_ROWS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
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

    /// A resolved value is outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rowdrag/config.toml`. Lengths are terminal cells.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Height of each row in terminal lines.
    #[serde(default)]
    pub row_height: Option<u16>,

    /// Lines from the top/bottom edge inside which auto-scroll engages.
    #[serde(default)]
    pub edge_margin: Option<u16>,

    /// Lines scrolled per auto-scroll tick.
    #[serde(default)]
    pub scroll_step: Option<u16>,

    /// Milliseconds between auto-scroll ticks.
    #[serde(default)]
    pub frame_interval_ms: Option<u64>,

    /// Number of rows to generate.
    #[serde(default)]
    pub row_count: Option<u32>,

    /// Seed for row colors.
    #[serde(default)]
    pub color_seed: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Row height in lines.
    pub row_height: u16,
    /// Edge zone in lines.
    pub edge_margin: u16,
    /// Lines per auto-scroll tick.
    pub scroll_step: u16,
    /// Milliseconds between ticks.
    pub frame_interval_ms: u64,
    /// Rows to generate.
    pub row_count: u32,
    /// Color seed.
    pub color_seed: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            row_height: 3,
            edge_margin: 3,
            scroll_step: 1,
            frame_interval_ms: 16,
            row_count: 300,
            color_seed: 0x5EED,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero row height, a zero
    /// scroll step or a zero frame interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "row_height",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.scroll_step == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scroll_step",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frame_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Engine tuning in terminal cells.
    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            row_height: f64::from(self.row_height),
            edge_margin: f64::from(self.edge_margin),
            scroll_step: f64::from(self.scroll_step),
            frame_interval: Duration::from_millis(self.frame_interval_ms),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rowdrag/rowdrag.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rowdrag").join("rowdrag.log")
    } else {
        PathBuf::from("rowdrag.log")
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
/// Returns `~/.config/rowdrag/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rowdrag").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROWDRAG_CONFIG` environment variable
/// 3. Default path `~/.config/rowdrag/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        row_height: config.row_height.unwrap_or(defaults.row_height),
        edge_margin: config.edge_margin.unwrap_or(defaults.edge_margin),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step),
        frame_interval_ms: config
            .frame_interval_ms
            .unwrap_or(defaults.frame_interval_ms),
        row_count: config.row_count.unwrap_or(defaults.row_count),
        color_seed: config.color_seed.unwrap_or(defaults.color_seed),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROWDRAG_ROWS`: Override row count (ignored with a warning if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(ROWS_ENV_VAR) {
        match raw.trim().parse::<u32>() {
            Ok(rows) => config.row_count = rows,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {ROWS_ENV_VAR}"),
        }
    }

    config
}

/// Values explicitly set on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--rows`
    pub rows: Option<u32>,
    /// `--row-height`
    pub row_height: Option<u16>,
    /// `--seed`
    pub seed: Option<u64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(rows) = overrides.rows {
        config.row_count = rows;
    }

    if let Some(row_height) = overrides.row_height {
        config.row_height = row_height;
    }

    if let Some(seed) = overrides.seed {
        config.color_seed = seed;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
