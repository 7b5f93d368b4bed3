//! Domain model types (pure).
//!
//! All types in this module are plain data; none of them know about the
//! terminal.

pub mod error;
pub mod gesture;
pub mod identifiers;
pub mod key_action;
pub mod order;
pub mod palette;

// Re-export for convenience
pub use error::{AppError, OrderError};
pub use gesture::{GesturePhase, GestureSample, GestureSignal};
pub use identifiers::RowId;
pub use key_action::KeyAction;
pub use order::{move_element, OrderSnapshot, OrderStore};
pub use palette::{ColorMap, Dataset, RowColor};
