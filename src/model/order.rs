//! Order store: the authoritative row order.
//!
//! The sequence is never mutated in place. Every change produces a new
//! immutable [`OrderSnapshot`], so renderers can detect a change by identity
//! alone.

use super::error::OrderError;
use super::identifiers::RowId;
use std::collections::HashSet;
use std::sync::Arc;

/// Relocate the element at `from` to `to`, preserving the relative order of
/// every other element.
///
/// This is a single-element move, not a swap: `[A, B, C, D]` moving 0 → 2
/// yields `[B, C, A, D]`. When `from == to` the result is content-equal to the
/// input. The input slice is never touched; the result is a fresh allocation.
///
/// # Errors
///
/// Returns [`OrderError::IndexOutOfRange`] if either index is `>= items.len()`.
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, OrderError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(OrderError::IndexOutOfRange { index, len });
        }
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Ok(moved)
}

/// Immutable view of the row order at one point in time.
///
/// Cloning is cheap (shared allocation). Two snapshots produced by different
/// store operations never share an allocation, even when their contents are
/// equal, so [`OrderSnapshot::same_identity`] is a reliable "needs re-render"
/// check.
#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    rows: Arc<[RowId]>,
    generation: u64,
}

impl OrderSnapshot {
    fn new(rows: Vec<RowId>, generation: u64) -> Self {
        Self {
            rows: rows.into(),
            generation,
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    /// Row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Monotonic counter bumped on every store replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if both snapshots are the very same allocation.
    pub fn same_identity(&self, other: &OrderSnapshot) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().copied()
    }
}

/// Content equality; identity is checked with [`OrderSnapshot::same_identity`].
impl PartialEq for OrderSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for OrderSnapshot {}

/// Owner of the row order.
#[derive(Debug, Clone)]
pub struct OrderStore {
    current: OrderSnapshot,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self {
            current: OrderSnapshot::new(Vec::new(), 0),
        }
    }
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the order with the initial dataset.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DuplicateRow`] if an id appears twice; the store
    /// is left unchanged.
    pub fn load(&mut self, ids: Vec<RowId>) -> Result<(), OrderError> {
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(row) = ids.iter().copied().find(|id| !seen.insert(*id)) {
            return Err(OrderError::DuplicateRow { row });
        }
        self.replace(ids);
        Ok(())
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.current.clone()
    }

    /// Number of rows.
    pub fn size_of(&self) -> usize {
        self.current.len()
    }

    /// Move the row at `from` to `to` and publish a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::IndexOutOfRange`] without touching the store.
    pub fn move_element(&mut self, from: usize, to: usize) -> Result<(), OrderError> {
        let moved = move_element(self.current.rows(), from, to)?;
        self.replace(moved);
        Ok(())
    }

    /// Publish a content-equal snapshot with a new identity.
    ///
    /// Used to force a re-render after transient visual state is cleared.
    pub fn refresh(&mut self) {
        let rows = self.current.rows().to_vec();
        self.replace(rows);
    }

    fn replace(&mut self, rows: Vec<RowId>) {
        let generation = self.current.generation + 1;
        self.current = OrderSnapshot::new(rows, generation);
    }
}
