//! Ephemeral state of one drag.

/// State of the current drag, if any.
///
/// `dragged_index` tracks the lifted row's *current* position, which changes
/// as the list reorders under the pointer; `origin_index` stays at the index
/// the drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    active: bool,
    dragged_index: Option<usize>,
    origin_index: Option<usize>,
}

impl DragSession {
    /// An inactive session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging the row at `index`.
    pub fn begin(&mut self, index: usize) {
        self.active = true;
        self.dragged_index = Some(index);
        self.origin_index = Some(index);
    }

    /// Record that the lifted row now sits at `index`.
    pub fn relocate(&mut self, index: usize) {
        if self.active {
            self.dragged_index = Some(index);
        }
    }

    /// Return to the inactive state. Returns false if already inactive.
    pub fn end(&mut self) -> bool {
        let was_active = self.active;
        *self = Self::default();
        was_active
    }

    /// True while a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current index of the lifted row.
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    /// Index the drag started from.
    pub fn origin_index(&self) -> Option<usize> {
        self.origin_index
    }

    /// True once the lifted row has left its starting slot.
    pub fn has_moved(&self) -> bool {
        self.active && self.dragged_index != self.origin_index
    }
}
