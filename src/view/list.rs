//! Scrollable list: the host's scroll position and the list widget.

use super::row::{RowKind, RowTemplate};
use super::styles::RowStyles;
use crate::integration::DragList;
use crate::state::ScrollTarget;
use crate::view_state::RowView;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

// ===== ListViewport =====

/// Scroll position of the list in lines.
///
/// Every request is clamped to `[0, content_height - viewport_height]`, so
/// auto-scroll past either end simply stops moving the list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListViewport {
    offset: f64,
    content_height: f64,
    viewport_height: f64,
}

impl ListViewport {
    /// Empty viewport at offset zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the content and viewport heights, re-clamping the offset.
    pub fn set_bounds(&mut self, content_height: f64, viewport_height: f64) {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Visible height.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll by `delta` lines (negative scrolls up).
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to_offset(self.offset + delta);
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }

    /// Jump so the last row touches the bottom edge.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollTarget for ListViewport {
    fn scroll_to_offset(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }
}

// ===== ListWidget =====

/// Draws the visible rows of a [`DragList`] and, while dragging, its ghost.
///
/// Reads geometry from the list itself, so the host must report layout and
/// scroll changes before drawing.
pub struct ListWidget<'a> {
    list: &'a DragList,
    styles: RowStyles,
}

impl<'a> ListWidget<'a> {
    /// Widget for `list`.
    pub fn new(list: &'a DragList, styles: RowStyles) -> Self {
        Self { list, styles }
    }

    fn paint(&self, view: &RowView, buf: &mut Buffer, clip: Rect, top: f64, height: u16) {
        let label = view.row.to_string();
        let kind = RowKind::of(view);
        let color = self.list.color_of(view.row);
        let (body_style, handle_style) = match kind {
            RowKind::Ghost => (self.styles.ghost(), self.styles.ghost()),
            RowKind::Placeholder => (self.styles.placeholder(), self.styles.placeholder()),
            RowKind::Resting => (self.styles.row(color), self.styles.handle(color)),
        };
        let template = RowTemplate {
            label: &label,
            kind,
            body_style,
            handle_style,
        };
        template.paint(buf, clip, to_line(top), height);
    }
}

impl Widget for ListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = self.list.controller().viewport();
        let row_height = geometry.row_height();
        let height = to_height(row_height);
        let range = geometry.visible_range(self.list.snapshot().len());

        for view in self.list.row_views_in(range) {
            let top = f64::from(area.y) + view.index as f64 * row_height - geometry.scroll_offset();
            self.paint(&view, buf, area, top, height);
        }

        if let Some(ghost) = self.list.ghost() {
            self.paint(&ghost.view, buf, area, ghost.top, height);
        }
    }
}

fn to_line(top: f64) -> i32 {
    // `as` saturates for out-of-range floats.
    top.floor() as i32
}

fn to_height(row_height: f64) -> u16 {
    (row_height.round() as u16).max(1)
}
