//! Drag session controller.
//!
//! Single owner of the drag session, the order store, the viewport geometry
//! and the auto-scroll loop, so that the lifted row's index and the row order
//! always change together.
//!
//! # Index mapping
//!
//! A pointer at absolute screen coordinate `y` targets row
//! `floor((y + scroll_offset - top_offset) / row_height)`, clamped to
//! `[0, len - 1]`. Clamping is the edge policy: positions above or below the
//! list target the first or last row.
//!
//! # Auto-scroll
//!
//! `y + edge_margin > viewport_height` scrolls down, `y < edge_margin` scrolls
//! up, anything else stops. The bottom check wins when a viewport is so small
//! that both hold. Auto-scroll stays disengaged until a layout is known, since
//! a zero viewport height would put every position in the bottom zone.

use super::auto_scroll::{AutoScroller, ScrollDirection, ScrollTarget};
use super::drag_session::DragSession;
use crate::config::DragConfig;
use crate::model::{OrderError, OrderSnapshot, OrderStore, RowId};
use crate::view_state::{Ghost, PointerPosition, RowView, ViewportGeometry};
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Result of a reorder check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pointer still targets the lifted row's slot (or no drag is active).
    Unchanged,
    /// The lifted row moved.
    Reordered {
        /// Previous index of the lifted row.
        from: usize,
        /// New index of the lifted row.
        to: usize,
    },
}

/// Drag lifecycle owner.
#[derive(Debug, Clone)]
pub struct DragController {
    config: DragConfig,
    order: OrderStore,
    session: DragSession,
    viewport: ViewportGeometry,
    pointer: PointerPosition,
    auto_scroll: AutoScroller,
}

impl DragController {
    /// Controller with an empty list and unknown geometry.
    pub fn new(config: DragConfig) -> Self {
        Self {
            order: OrderStore::new(),
            session: DragSession::new(),
            viewport: ViewportGeometry::new(config.row_height),
            pointer: PointerPosition::new(),
            auto_scroll: AutoScroller::new(config.scroll_step, config.frame_interval),
            config,
        }
    }

    /// Replace the list contents. Any drag in progress is reset first.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DuplicateRow`] if `ids` is not unique.
    pub fn load_initial_order(&mut self, ids: Vec<RowId>) -> Result<(), OrderError> {
        self.reset();
        self.order.load(ids)?;
        debug!(rows = self.order.size_of(), "Initial order loaded");
        Ok(())
    }

    /// Layout callback from the renderer.
    pub fn on_layout(&mut self, viewport_height: f64, top_offset: f64) {
        self.viewport.on_layout(viewport_height, top_offset);
        trace!(viewport_height, top_offset, "Layout updated");
    }

    /// Scroll callback from the renderer.
    ///
    /// While dragging, the row under a resting pointer changes as the list
    /// scrolls, so the reorder check is re-run against the last published
    /// pointer position.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError`] from the store (unreachable with clamped
    /// indices).
    pub fn on_scroll(&mut self, scroll_offset: f64) -> Result<MoveOutcome, OrderError> {
        self.viewport.on_scroll(scroll_offset);
        match (self.session.is_active(), self.pointer.latest()) {
            (true, Some(position)) => self.reorder_towards(position),
            _ => Ok(MoveOutcome::Unchanged),
        }
    }

    /// Map an absolute pointer coordinate to a row index.
    ///
    /// Always within `[0, len - 1]`; `None` only when the list is empty.
    pub fn position_to_index(&self, position: f64) -> Option<usize> {
        let size = self.order.size_of();
        if size == 0 {
            return None;
        }
        let raw = ((position + self.viewport.scroll_offset() - self.viewport.top_offset())
            / self.viewport.row_height())
        .floor();
        let last = (size - 1) as f64;
        let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, last) };
        Some(clamped as usize)
    }

    /// Lift the row under `position`.
    ///
    /// Returns false (and changes nothing) when the list is empty.
    pub fn start(&mut self, position: f64) -> bool {
        let Some(index) = self.position_to_index(position) else {
            debug!(position, "Drag start ignored: list is empty");
            return false;
        };
        self.session.begin(index);
        self.pointer.publish(position);
        debug!(position, index, row = ?self.order.snapshot().get(index), "Drag started");
        true
    }

    /// Pointer moved while dragging.
    ///
    /// Updates auto-scroll for the edge zones, then moves the lifted row to
    /// the slot under the pointer. Ignored when no drag is active.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError`] from the store (unreachable with clamped
    /// indices).
    pub fn move_to(&mut self, position: f64) -> Result<MoveOutcome, OrderError> {
        if !self.session.is_active() {
            trace!(position, "Move ignored: no active drag");
            return Ok(MoveOutcome::Unchanged);
        }
        self.pointer.publish(position);
        self.update_auto_scroll(position);
        self.reorder_towards(position)
    }

    /// End the drag, keeping the order reached so far.
    ///
    /// Stops auto-scroll and publishes a fresh snapshot so renderers drop the
    /// hidden-in-place row. Returns false (and does nothing) when no drag is
    /// active.
    pub fn reset(&mut self) -> bool {
        if !self.session.is_active() {
            return false;
        }
        let origin = self.session.origin_index();
        let dropped_at = self.session.dragged_index();
        let moved = self.session.has_moved();
        self.session.end();
        self.pointer.clear();
        self.auto_scroll.stop();
        self.order.refresh();
        debug!(?origin, ?dropped_at, moved, "Drag ended");
        true
    }

    /// Run the auto-scroll loop if a tick is due.
    ///
    /// Returns the offset requested from `target`, if any.
    pub fn tick(&mut self, now: Instant, target: &mut impl ScrollTarget) -> Option<f64> {
        self.auto_scroll.tick(now, self.viewport.scroll_offset(), target)
    }

    /// Time until the auto-scroll loop wants to run, or `None` when idle.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.auto_scroll.time_until_due(now)
    }

    /// Current order snapshot.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.order.snapshot()
    }

    /// Current drag session.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Current geometry.
    pub fn viewport(&self) -> &ViewportGeometry {
        &self.viewport
    }

    /// Published pointer position.
    pub fn pointer(&self) -> &PointerPosition {
        &self.pointer
    }

    /// True while the auto-scroll flag is set.
    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_scrolling()
    }

    /// Current auto-scroll direction.
    pub fn auto_scroll_direction(&self) -> Option<ScrollDirection> {
        self.auto_scroll.direction()
    }

    /// Render input for every row.
    pub fn row_views(&self) -> Vec<RowView> {
        self.row_views_in(0..self.order.size_of())
    }

    /// Render input for rows in `range` (clamped to the list).
    pub fn row_views_in(&self, range: Range<usize>) -> Vec<RowView> {
        let snapshot = self.order.snapshot();
        let end = range.end.min(snapshot.len());
        let start = range.start.min(end);
        let dragged = self.session.dragged_index();
        (start..end)
            .filter_map(|index| {
                snapshot
                    .get(index)
                    .map(|row| RowView::in_place(row, index, dragged == Some(index)))
            })
            .collect()
    }

    /// The floating copy of the lifted row, while dragging.
    pub fn ghost(&self) -> Option<Ghost> {
        let index = self.session.dragged_index()?;
        let row = self.order.snapshot().get(index)?;
        let pointer = self.pointer.latest()?;
        Some(Ghost::centered_on(
            row,
            index,
            pointer,
            self.viewport.row_height(),
        ))
    }

    fn update_auto_scroll(&mut self, position: f64) {
        if !self.viewport.is_layout_known() {
            trace!(position, "Auto-scroll skipped: layout unknown");
            return;
        }
        let margin = self.config.edge_margin;
        if position + margin > self.viewport.viewport_height() {
            self.auto_scroll.scroll(ScrollDirection::Down);
        } else if position < margin {
            self.auto_scroll.scroll(ScrollDirection::Up);
        } else {
            self.auto_scroll.stop();
        }
    }

    fn reorder_towards(&mut self, position: f64) -> Result<MoveOutcome, OrderError> {
        let (Some(from), Some(to)) = (
            self.session.dragged_index(),
            self.position_to_index(position),
        ) else {
            return Ok(MoveOutcome::Unchanged);
        };
        if from == to {
            return Ok(MoveOutcome::Unchanged);
        }
        self.order.move_element(from, to)?;
        self.session.relocate(to);
        debug!(from, to, "Row reordered");
        Ok(MoveOutcome::Reordered { from, to })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
