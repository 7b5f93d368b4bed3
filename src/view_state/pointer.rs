//! Published pointer position.
//!
//! One writer (the drag controller) publishes the latest pointer coordinate.
//! The ghost and the scroll-feedback reorder check read the latest value. The
//! terminal host compares the version counter against the one it last drew
//! to decide whether the frame is stale.

/// Latest pointer position plus a change counter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    value: Option<f64>,
    version: u64,
}

impl PointerPosition {
    /// Empty position (no pointer down).
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new position.
    pub fn publish(&mut self, position: f64) {
        self.value = Some(position);
        self.version += 1;
    }

    /// Withdraw the position (pointer released).
    pub fn clear(&mut self) {
        if self.value.take().is_some() {
            self.version += 1;
        }
    }

    /// Most recently published position.
    pub fn latest(&self) -> Option<f64> {
        self.value
    }

    /// Counter bumped on every publish or clear.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if the value changed after `seen_version`.
    pub fn changed_since(&self, seen_version: u64) -> bool {
        self.version != seen_version
    }
}
