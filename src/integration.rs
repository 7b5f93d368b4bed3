//! Pure core integration.
//!
//! [`DragList`] wires the gesture state machine to the drag controller and
//! exposes the callbacks a host (renderer + pointer recognizer) drives. It is
//! testable without I/O: feed samples, report geometry, advance time.

use crate::config::DragConfig;
use crate::model::{ColorMap, Dataset, GestureSample, OrderError, OrderSnapshot, RowColor, RowId};
use crate::state::{
    DragCommand, DragController, GestureMachine, GestureState, MoveOutcome, ScrollTarget,
};
use crate::view_state::{Ghost, RowView};
use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// A drag-to-reorder list.
#[derive(Debug, Clone)]
pub struct DragList {
    machine: GestureMachine,
    controller: DragController,
    colors: Arc<ColorMap>,
}

impl DragList {
    /// Empty list using `colors` for presentation lookups.
    pub fn new(config: DragConfig, colors: Arc<ColorMap>) -> Self {
        Self {
            machine: GestureMachine::new(),
            controller: DragController::new(config),
            colors,
        }
    }

    /// List populated from a generated dataset.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DuplicateRow`] if the dataset repeats an id.
    pub fn from_dataset(config: DragConfig, dataset: Dataset) -> Result<Self, OrderError> {
        let mut list = Self::new(config, dataset.colors);
        list.load_initial_order(dataset.order)?;
        Ok(list)
    }

    /// Set the initial row order. Called once at session start.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DuplicateRow`] if `ids` is not unique.
    pub fn load_initial_order(&mut self, ids: Vec<RowId>) -> Result<(), OrderError> {
        self.controller.load_initial_order(ids)
    }

    /// Renderer layout callback.
    pub fn on_layout(&mut self, viewport_height: f64, top_offset: f64) {
        self.controller.on_layout(viewport_height, top_offset);
    }

    /// Renderer scroll callback.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError`] from the reorder check.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> Result<MoveOutcome, OrderError> {
        self.controller.on_scroll(scroll_offset)
    }

    /// Feed one recognizer sample through the state machine.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError`] from the reorder check.
    pub fn handle_sample(&mut self, sample: GestureSample) -> Result<MoveOutcome, OrderError> {
        let Some(command) = self.machine.advance(sample) else {
            return Ok(MoveOutcome::Unchanged);
        };
        match command {
            DragCommand::Start(position) => {
                self.controller.start(position);
                Ok(MoveOutcome::Unchanged)
            }
            DragCommand::Move(position) => self.controller.move_to(position),
            DragCommand::Reset => {
                self.controller.reset();
                Ok(MoveOutcome::Unchanged)
            }
            DragCommand::Restart(position) => {
                debug!(position, "Gesture restarted before previous one ended");
                self.controller.reset();
                self.controller.start(position);
                Ok(MoveOutcome::Unchanged)
            }
        }
    }

    /// Advance the auto-scroll loop; see [`DragController::tick`].
    pub fn tick(&mut self, now: Instant, target: &mut impl ScrollTarget) -> Option<f64> {
        self.controller.tick(now, target)
    }

    /// Time until the auto-scroll loop wants a tick.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.controller.time_until_tick(now)
    }

    /// Render input for rows in `range`.
    pub fn row_views_in(&self, range: Range<usize>) -> Vec<RowView> {
        self.controller.row_views_in(range)
    }

    /// Render input for every row.
    pub fn row_views(&self) -> Vec<RowView> {
        self.controller.row_views()
    }

    /// Floating copy of the lifted row.
    pub fn ghost(&self) -> Option<Ghost> {
        self.controller.ghost()
    }

    /// Current order.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.controller.snapshot()
    }

    /// Presentation color of `row`.
    pub fn color_of(&self, row: RowId) -> Option<RowColor> {
        self.colors.get(row)
    }

    /// Gesture machine state.
    pub fn gesture_state(&self) -> GestureState {
        self.machine.state()
    }

    /// True while a row is lifted.
    pub fn is_dragging(&self) -> bool {
        self.controller.session().is_active()
    }

    /// Underlying controller (read-only).
    pub fn controller(&self) -> &DragController {
        &self.controller
    }
}
