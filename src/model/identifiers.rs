//! Row identifier newtype.
//!
//! Row ids are created once when the dataset is generated and never change
//! afterwards. Reordering moves ids around; it never creates or drops them.

use std::fmt;

/// Stable key identifying a row across reorders.
///
/// Presentation data (e.g. the row color) is looked up by this key in a side
/// table, so the id must not be confused with the row's current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u32);

impl RowId {
    /// Create a row id from its raw value.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RowId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate `count` sequential row ids starting at 0.
pub fn sequential_ids(count: u32) -> Vec<RowId> {
    (0..count).map(RowId::new).collect()
}
