//! Viewport geometry reported by the list renderer.
//!
//! The renderer writes this through `on_layout`/`on_scroll`; the drag
//! controller only reads it. Until the first layout arrives every field is
//! zero, which biases index math but never panics.

use std::ops::Range;
use tracing::warn;

/// Geometry of the scrollable list.
///
/// All values share one unit (pixels for touch hosts, cells for the terminal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    row_height: f64,
    viewport_height: f64,
    top_offset: f64,
    scroll_offset: f64,
    layout_known: bool,
}

impl ViewportGeometry {
    /// Geometry with a fixed row height and no layout yet.
    ///
    /// A non-positive or non-finite `row_height` is replaced by `1.0`.
    pub fn new(row_height: f64) -> Self {
        let row_height = if row_height.is_finite() && row_height > 0.0 {
            row_height
        } else {
            warn!(row_height, "Invalid row height, falling back to 1.0");
            1.0
        };
        Self {
            row_height,
            viewport_height: 0.0,
            top_offset: 0.0,
            scroll_offset: 0.0,
            layout_known: false,
        }
    }

    /// Record the viewport height and its absolute screen-space top edge.
    pub fn on_layout(&mut self, viewport_height: f64, top_offset: f64) {
        self.viewport_height = finite_or_zero(viewport_height, "viewport_height").max(0.0);
        self.top_offset = finite_or_zero(top_offset, "top_offset");
        self.layout_known = true;
    }

    /// Record the current scroll distance.
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.scroll_offset = finite_or_zero(scroll_offset, "scroll_offset");
    }

    /// Height of every row.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Visible height of the list.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Absolute screen position of the list's top edge.
    pub fn top_offset(&self) -> f64 {
        self.top_offset
    }

    /// Current scroll distance from the first row.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// True once a layout callback has been received.
    pub fn is_layout_known(&self) -> bool {
        self.layout_known
    }

    /// Total height of `rows` rows.
    pub fn content_height(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height
    }

    /// Largest scroll offset that still fills the viewport (never negative).
    pub fn max_scroll_offset(&self, rows: usize) -> f64 {
        (self.content_height(rows) - self.viewport_height).max(0.0)
    }

    /// Indices of rows at least partly inside the viewport.
    pub fn visible_range(&self, rows: usize) -> Range<usize> {
        if rows == 0 || self.viewport_height <= 0.0 {
            return 0..0;
        }
        let scroll = self.scroll_offset.max(0.0);
        let first = (scroll / self.row_height).floor() as usize;
        let end = ((scroll + self.viewport_height) / self.row_height).ceil() as usize;
        first.min(rows)..end.min(rows)
    }
}

fn finite_or_zero(value: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(field, value, "Non-finite geometry value treated as zero");
        0.0
    }
}
