//! What the row template needs to draw one row.

use crate::model::RowId;

/// Render input for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    /// Row identity (key into the color table).
    pub row: RowId,
    /// Current display index.
    pub index: usize,
    /// The row is lifted: draw it as an empty slot in place.
    pub is_being_dragged: bool,
    /// This is the floating copy that follows the pointer.
    pub is_floating_ghost: bool,
}

impl RowView {
    /// A row drawn in its list slot.
    pub fn in_place(row: RowId, index: usize, is_being_dragged: bool) -> Self {
        Self {
            row,
            index,
            is_being_dragged,
            is_floating_ghost: false,
        }
    }
}

/// The floating copy of the dragged row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    /// Row data, with `is_floating_ghost` set.
    pub view: RowView,
    /// Absolute screen-space top edge: pointer minus half a row.
    pub top: f64,
}

impl Ghost {
    /// Ghost for `row` at `index`, centered vertically on `pointer`.
    pub fn centered_on(row: RowId, index: usize, pointer: f64, row_height: f64) -> Self {
        Self {
            view: RowView {
                row,
                index,
                is_being_dragged: false,
                is_floating_ghost: true,
            },
            top: pointer - row_height / 2.0,
        }
    }
}
