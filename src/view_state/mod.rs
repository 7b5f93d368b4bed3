//! View-state layer: what the renderer and the drag engine share.
//!
//! Geometry flows in from the renderer, row views and the ghost flow out.

pub mod pointer;
pub mod row_view;
pub mod viewport;

pub use pointer::PointerPosition;
pub use row_view::{Ghost, RowView};
pub use viewport::ViewportGeometry;
