//! Row presentation side table and initial dataset generation.
//!
//! Colors are keyed by [`RowId`], not by index, so they travel with the row
//! when it is reordered. The table is built once and never mutated.

use super::identifiers::{sequential_ids, RowId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl RowColor {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in `[0, 255]` (ITU-R BT.601 weights).
    pub fn luma(&self) -> u8 {
        let luma = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        luma.round() as u8
    }
}

/// `#RRGGBB`
impl fmt::Display for RowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Immutable `RowId → RowColor` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<RowId, RowColor>,
}

impl ColorMap {
    /// Build the table from `(row, color)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (RowId, RowColor)>) -> Self {
        Self {
            colors: pairs.into_iter().collect(),
        }
    }

    /// Color for `row`, if it was part of the dataset.
    pub fn get(&self, row: RowId) -> Option<RowColor> {
        self.colors.get(&row).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Initial rows plus their shared color table.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Initial display order.
    pub order: Vec<RowId>,
    /// Presentation lookup shared with every renderer.
    pub colors: Arc<ColorMap>,
}

impl Dataset {
    /// Generate `count` rows with pseudo-random colors derived from `seed`.
    ///
    /// The same `(count, seed)` always produces the same dataset.
    pub fn generate(count: u32, seed: u64) -> Self {
        let order = sequential_ids(count);
        let colors = ColorMap::from_pairs(order.iter().map(|&row| (row, color_for(row, seed))));
        Self {
            order,
            colors: Arc::new(colors),
        }
    }
}

/// Deterministic color for a row (splitmix64 finalizer over row and seed).
fn color_for(row: RowId, seed: u64) -> RowColor {
    let mut z = seed ^ u64::from(row.get()).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let [r, g, b, ..] = z.to_le_bytes();
    RowColor::new(r, g, b)
}
