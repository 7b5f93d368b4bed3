//! Gesture samples as reported by a pointer recognizer.

/// Phase of a single-pointer pan gesture.
///
/// `End`, `Cancelled`, `Failed` and `Undetermined` all terminate a drag the
/// same way; see [`GesturePhase::signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer went down on a drag handle.
    Began,
    /// Pointer is moving (or resting) while still down.
    Active,
    /// Pointer was released normally.
    End,
    /// Gesture was cancelled by the host (focus loss, escape key).
    Cancelled,
    /// Recognizer decided the touch was not a pan.
    Failed,
    /// Recognizer lost track of the gesture.
    Undetermined,
}

/// Coarse classification used by the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSignal {
    /// A new gesture started.
    Begin,
    /// The gesture continues.
    Active,
    /// Any terminal phase.
    Ended,
}

impl GesturePhase {
    /// Collapse the phase into the signal the state machine reacts to.
    pub fn signal(self) -> GestureSignal {
        match self {
            GesturePhase::Began => GestureSignal::Begin,
            GesturePhase::Active => GestureSignal::Active,
            GesturePhase::End
            | GesturePhase::Cancelled
            | GesturePhase::Failed
            | GesturePhase::Undetermined => GestureSignal::Ended,
        }
    }
}

/// One `(phase, position)` sample.
///
/// `position` is the absolute vertical pointer coordinate in screen space,
/// in the same unit as the viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Gesture phase at the time of the sample.
    pub phase: GesturePhase,
    /// Absolute vertical pointer position.
    pub position: f64,
}

impl GestureSample {
    /// Create a sample.
    pub fn new(phase: GesturePhase, position: f64) -> Self {
        Self { phase, position }
    }

    /// Shorthand for a `Began` sample.
    pub fn began(position: f64) -> Self {
        Self::new(GesturePhase::Began, position)
    }

    /// Shorthand for an `Active` sample.
    pub fn active(position: f64) -> Self {
        Self::new(GesturePhase::Active, position)
    }

    /// Shorthand for an `End` sample.
    pub fn end(position: f64) -> Self {
        Self::new(GesturePhase::End, position)
    }

    /// Shorthand for a `Cancelled` sample.
    pub fn cancelled(position: f64) -> Self {
        Self::new(GesturePhase::Cancelled, position)
    }
}
