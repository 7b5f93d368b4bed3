//! rowdrag
//!
//! Drag-to-reorder list engine with a terminal front end.
//!
//! Pure core / impure shell: `model`, `state`, `view_state` and
//! `integration` do no I/O and are driven by explicit callbacks and
//! timestamps; `view` owns the terminal and feeds them.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

// Re-export main loop integration
pub mod integration;

pub use integration::DragList;
