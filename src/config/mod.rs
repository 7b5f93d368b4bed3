//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use std::time::Duration;

/// Tuning of the drag engine.
///
/// All lengths share the unit of the viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Height of every row.
    pub row_height: f64,
    /// Distance from the top/bottom edge inside which auto-scroll engages.
    pub edge_margin: f64,
    /// Offset change per auto-scroll tick (scroll speed).
    pub scroll_step: f64,
    /// Time between auto-scroll ticks.
    pub frame_interval: Duration,
}

impl Default for DragConfig {
    /// Touch-screen values: 70 px rows, 100 px edge zone, 20 px per frame.
    fn default() -> Self {
        Self {
            row_height: 70.0,
            edge_margin: 100.0,
            scroll_step: 20.0,
            frame_interval: Duration::from_millis(16),
        }
    }
}
