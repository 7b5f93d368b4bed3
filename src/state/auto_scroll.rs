//! Edge auto-scroll as a cancellable repeating task.
//!
//! The task is not driven by gesture samples. The host asks when the next
//! tick is due ([`AutoScroller::time_until_due`]), waits at most that long for
//! input, then calls [`AutoScroller::tick`]. Each tick re-checks the scrolling
//! flag; once it is cleared the task stops rescheduling itself, so a pointer
//! resting in the edge zone scrolls continuously while a released pointer
//! causes no further offset changes.

use std::time::{Duration, Instant};
use tracing::debug;

/// Receiver of imperative scroll requests (the list renderer).
///
/// Fire-and-forget: the renderer may clamp the offset and is expected to
/// report the resulting offset back through its scroll callback.
pub trait ScrollTarget {
    /// Scroll the list so that `offset` is the distance from the first row.
    fn scroll_to_offset(&mut self, offset: f64);
}

/// When the task is next due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Due {
    Immediately,
    At(Instant),
}

/// A task that reschedules itself at a fixed interval until stopped.
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    next_due: Option<Due>,
}

impl RepeatingTask {
    /// A stopped task with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedule the first run immediately. No-op if already running.
    pub fn start(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(Due::Immediately);
        }
    }

    /// Cancel any pending run.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// If a run is due at `now`, consume it, schedule the next one and
    /// return true.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.next_due {
            None => false,
            Some(Due::Immediately) => true,
            Some(Due::At(at)) => now >= at,
        };
        if due {
            self.next_due = Some(Due::At(now + self.interval));
        }
        due
    }

    /// Time left until the next run, or `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        match self.next_due? {
            Due::Immediately => Some(Duration::ZERO),
            Due::At(at) => Some(at.saturating_duration_since(now)),
        }
    }
}

/// Direction of an edge scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the first row (negative offset change).
    Up,
    /// Toward the last row (positive offset change).
    Down,
}

impl ScrollDirection {
    /// `-1.0` for up, `1.0` for down.
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Up => -1.0,
            ScrollDirection::Down => 1.0,
        }
    }
}

/// Edge auto-scroll loop.
#[derive(Debug, Clone)]
pub struct AutoScroller {
    task: RepeatingTask,
    step: f64,
    direction: Option<ScrollDirection>,
}

impl AutoScroller {
    /// Scroller moving `step` units per tick, ticking every `interval`.
    pub fn new(step: f64, interval: Duration) -> Self {
        Self {
            task: RepeatingTask::new(interval),
            step,
            direction: None,
        }
    }

    /// Begin (or redirect) scrolling.
    ///
    /// Returns false when already scrolling in `direction`, in which case the
    /// running loop is left alone.
    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        if self.direction == Some(direction) {
            return false;
        }
        debug!(?direction, step = self.step, "Auto-scroll engaged");
        self.direction = Some(direction);
        self.task.start();
        true
    }

    /// Clear the scrolling flag. The pending tick cancels itself when it
    /// observes the cleared flag.
    pub fn stop(&mut self) {
        if let Some(direction) = self.direction.take() {
            debug!(?direction, "Auto-scroll released");
        }
    }

    /// True while the scrolling flag is set.
    pub fn is_scrolling(&self) -> bool {
        self.direction.is_some()
    }

    /// Current direction, if scrolling.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// Signed offset change per tick, if scrolling.
    pub fn amount(&self) -> Option<f64> {
        self.direction.map(|direction| direction.sign() * self.step)
    }

    /// Run one tick if due.
    ///
    /// Scrolls `target` to `current_offset + amount` and returns the requested
    /// offset. Returns `None` when nothing was due or the loop has been
    /// stopped (in which case it also stops rescheduling).
    pub fn tick(
        &mut self,
        now: Instant,
        current_offset: f64,
        target: &mut impl ScrollTarget,
    ) -> Option<f64> {
        if !self.task.poll(now) {
            return None;
        }
        let Some(amount) = self.amount() else {
            self.task.stop();
            return None;
        };
        let offset = current_offset + amount;
        target.scroll_to_offset(offset);
        Some(offset)
    }

    /// Time until the next tick, or `None` when the loop is idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.task.time_until_due(now)
    }
}
