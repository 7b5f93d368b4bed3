//! Row template.
//!
//! Every row is `row_height` lines tall: a handle strip on the left and the
//! row label centered in the remaining width, both on the middle line. Rows
//! may be partly scrolled out of the list, so painting clips line by line.

use super::constants::{HANDLE_GLYPH, HANDLE_WIDTH};
use crate::view_state::RowView;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// How a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Normal row in the list.
    Resting,
    /// The lifted row's slot: painted blank.
    Placeholder,
    /// The floating copy following the pointer.
    Ghost,
}

impl RowKind {
    /// Kind for a render-input row.
    pub fn of(view: &RowView) -> Self {
        if view.is_floating_ghost {
            Self::Ghost
        } else if view.is_being_dragged {
            Self::Placeholder
        } else {
            Self::Resting
        }
    }
}

/// One row ready to paint.
#[derive(Debug, Clone)]
pub struct RowTemplate<'a> {
    /// Text centered in the row.
    pub label: &'a str,
    /// Resting, placeholder or ghost.
    pub kind: RowKind,
    /// Style of the row body.
    pub body_style: Style,
    /// Style of the handle strip.
    pub handle_style: Style,
}

impl RowTemplate<'_> {
    /// Paint the row whose first line is screen line `top`, clipped to `clip`.
    pub fn paint(&self, buf: &mut Buffer, clip: Rect, top: i32, height: u16) {
        if clip.width == 0 {
            return;
        }
        let blank = " ".repeat(usize::from(clip.width));
        let middle = top + i32::from(height / 2);

        for y in top..top + i32::from(height) {
            let Some(line) = clipped_line(clip, y) else {
                continue;
            };
            buf.set_string(clip.x, line, &blank, self.body_style);

            if self.kind == RowKind::Placeholder || y != middle {
                continue;
            }
            self.paint_handle(buf, clip, line);
            self.paint_label(buf, clip, line);
        }
    }

    fn paint_handle(&self, buf: &mut Buffer, clip: Rect, line: u16) {
        let width = HANDLE_WIDTH.min(clip.width);
        let strip = " ".repeat(usize::from(width));
        buf.set_string(clip.x, line, &strip, self.handle_style);
        let glyph_x = clip.x + width.saturating_sub(1) / 2;
        buf.set_string(glyph_x, line, HANDLE_GLYPH, self.handle_style);
    }

    fn paint_label(&self, buf: &mut Buffer, clip: Rect, line: u16) {
        let available = clip.width.saturating_sub(HANDLE_WIDTH);
        if available == 0 {
            return;
        }
        let label_width = u16::try_from(self.label.width()).unwrap_or(u16::MAX);
        let start = clip.x + HANDLE_WIDTH + available.saturating_sub(label_width) / 2;
        buf.set_stringn(
            start,
            line,
            self.label,
            usize::from(available),
            self.body_style,
        );
    }
}

/// Screen line `y` as a buffer row, if it lies inside `clip`.
fn clipped_line(clip: Rect, y: i32) -> Option<u16> {
    let line = u16::try_from(y).ok()?;
    (clip.top()..clip.bottom()).contains(&line).then_some(line)
}
