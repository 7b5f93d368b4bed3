//! Drag engine state machines (pure).
//!
//! All state transitions are plain functions testable without a terminal.
//! Time enters only as an `Instant` argument to the auto-scroll tick.

pub mod auto_scroll;
pub mod controller;
pub mod drag_session;
pub mod gesture_machine;

// Re-export for convenience
pub use auto_scroll::{AutoScroller, RepeatingTask, ScrollDirection, ScrollTarget};
pub use controller::{DragController, MoveOutcome};
pub use drag_session::DragSession;
pub use gesture_machine::{DragCommand, GestureMachine, GestureState};
