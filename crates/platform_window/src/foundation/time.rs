//! Time management utilities
//!
//! All input timing is done in whole milliseconds ("ticks") read from a
//! [`Clock`]. The clock is a trait so tests can drive time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond timestamp
pub type Ticks = i64;

/// Marker for a timestamp that has not been recorded yet
pub const UNSET_TICKS: Ticks = -1;

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn millis(&self) -> Ticks;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> Ticks {
        Ticks::try_from(self.origin.elapsed().as_millis()).unwrap_or(Ticks::MAX)
    }
}

/// Hand-driven clock
///
/// Clones share the same underlying counter, so a test can keep one handle
/// and give another to the window.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Ticks>>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: Ticks) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Set the current time
    pub fn set(&self, now: Ticks) {
        self.now.set(now);
    }

    /// Move the clock forward
    pub fn advance(&self, millis: Ticks) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> Ticks {
        self.now.get()
    }
}

/// Restartable timer measuring ticks against a clock
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    start: Ticks,
}

impl TickTimer {
    /// Create a timer started at `now`
    pub const fn started_at(now: Ticks) -> Self {
        Self { start: now }
    }

    /// Restart the timer at `now`
    pub fn restart(&mut self, now: Ticks) {
        self.start = now;
    }

    /// Ticks elapsed between the last restart and `now`
    pub const fn ticks_elapsed(&self, now: Ticks) -> Ticks {
        now - self.start
    }
}
