//! Gesture state machine (pure).
//!
//! Turns the raw sample stream of a pan recognizer into drag commands. The
//! transition function has no side effects; the caller applies the returned
//! [`DragCommand`] to the drag controller.
//!
//! | Current | Signal   | Command          | Next   |
//! |---------|----------|------------------|--------|
//! | Idle    | Begin    | `Start`          | Active |
//! | Active  | Active   | `Move`           | Active |
//! | Active  | Ended    | `Reset`          | Idle   |
//! | Idle    | Active   | none             | Idle   |
//! | Idle    | Ended    | none             | Idle   |
//! | Active  | Begin    | `Restart`        | Active |

use crate::model::{GestureSample, GestureSignal};
use tracing::{debug, trace};

/// Machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag gesture has begun and not yet ended.
    Active,
}

/// Command for the drag controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragCommand {
    /// Lift the row under `position`.
    Start(f64),
    /// Pointer moved to `position`.
    Move(f64),
    /// Drop / abort the current drag.
    Reset,
    /// A new gesture began before the old one ended: reset, then start.
    Restart(f64),
}

/// Gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    /// Machine in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Feed one sample; returns the command to apply, if any.
    ///
    /// Samples that do not match a transition are ignored. In particular,
    /// `Active` before `Began` and repeated terminal phases are no-ops, so
    /// exactly one `Reset` is emitted per gesture.
    pub fn advance(&mut self, sample: GestureSample) -> Option<DragCommand> {
        let signal = sample.phase.signal();
        let (next, command) = match (self.state, signal) {
            (GestureState::Idle, GestureSignal::Begin) => {
                (GestureState::Active, Some(DragCommand::Start(sample.position)))
            }
            (GestureState::Active, GestureSignal::Active) => {
                (GestureState::Active, Some(DragCommand::Move(sample.position)))
            }
            (GestureState::Active, GestureSignal::Ended) => (GestureState::Idle, Some(DragCommand::Reset)),
            (GestureState::Active, GestureSignal::Begin) => {
                (GestureState::Active, Some(DragCommand::Restart(sample.position)))
            }
            (GestureState::Idle, GestureSignal::Active | GestureSignal::Ended) => {
                trace!(phase = ?sample.phase, "Ignoring sample while idle");
                (GestureState::Idle, None)
            }
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, phase = ?sample.phase, "Gesture transition");
        }
        self.state = next;
        command
    }
}
