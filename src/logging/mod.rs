//! Tracing subscriber initialization.
//!
//! The terminal belongs to the TUI, so logs are written to a file instead.
//! Users can follow them with `tail -f` in a separate terminal.
//!
//! What ends up in the file, by level:
//!
//! - `error`: event loop and terminal setup failures, including an order
//!   store contract violation
//! - `warn`: invalid environment overrides, non-finite geometry
//! - `info`: the resolved configuration and the TUI start
//! - `debug`: gesture transitions, drag start and end (origin, drop slot,
//!   whether the row moved), every reorder, auto-scroll engaging and
//!   releasing, resizes
//! - `trace`: layout updates and samples ignored outside a drag

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaults to "info". Use `RUST_LOG=rowdrag=debug` to
/// follow a drag as it happens.
///
/// Creates the log directory if it doesn't exist. The file is appended to and
/// never rotated; one session is small.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the path has no file
/// name, or a global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| {
                LoggingError::DirectoryCreation {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
