//! Mouse events to gesture samples.
//!
//! Terminal cells are discrete, so a pointer on screen line `y` is reported at
//! the line's vertical center, `y + 0.5`. This keeps the ghost centered on the
//! pointer's line for any row height.

use super::constants::HANDLE_WIDTH;
use crate::model::GestureSample;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Turns left-button mouse events into [`GestureSample`]s.
///
/// A gesture begins only when the button goes down on a row's handle strip.
/// Once begun, drags and the release are tracked anywhere on screen.
#[derive(Debug, Clone, Default)]
pub struct PointerRecognizer {
    tracking: bool,
    last_position: f64,
}

impl PointerRecognizer {
    /// Recognizer with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a press on a handle and the matching release or cancel.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Sample for `mouse`, given the list's screen area.
    pub fn sample_for(&mut self, mouse: &MouseEvent, list_area: Rect) -> Option<GestureSample> {
        let position = line_center(mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_handle(mouse, list_area) => {
                self.tracking = true;
                self.last_position = position;
                Some(GestureSample::began(position))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.tracking => {
                self.last_position = position;
                Some(GestureSample::active(position))
            }
            MouseEventKind::Up(MouseButton::Left) if self.tracking => {
                self.tracking = false;
                self.last_position = position;
                Some(GestureSample::end(position))
            }
            _ => None,
        }
    }

    /// Abort the gesture in progress (Esc, focus loss).
    pub fn cancel(&mut self) -> Option<GestureSample> {
        if !self.tracking {
            return None;
        }
        self.tracking = false;
        Some(GestureSample::cancelled(self.last_position))
    }
}

fn line_center(row: u16) -> f64 {
    f64::from(row) + 0.5
}

fn on_handle(mouse: &MouseEvent, list_area: Rect) -> bool {
    let handle = Rect {
        width: HANDLE_WIDTH.min(list_area.width),
        ..list_area
    };
    (handle.left()..handle.right()).contains(&mouse.column)
        && (handle.top()..handle.bottom()).contains(&mouse.row)
}
