//! Layout dimension constants for TUI rendering.

use std::time::Duration;

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for the drag status and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the drag handle at the left edge of every row, in columns.
///
/// Only presses inside this strip start a drag; presses elsewhere on a row
/// are ignored so the list can still be scrolled with the wheel.
pub const HANDLE_WIDTH: u16 = 3;

/// Glyph drawn in the middle of the handle strip.
pub const HANDLE_GLYPH: &str = "@";

/// Longest the event loop sleeps when no auto-scroll tick is pending.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
