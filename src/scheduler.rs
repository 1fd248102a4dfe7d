//! Fixed-step tick scheduler.
//!
//! The main loop polls input at its own cadence and asks the scheduler how
//! many logical ticks have come due since the last poll. One tick handler
//! runs to completion before the next; ticks never overlap.
//!
//! `start` always discards any pending schedule first, so a rapid restart
//! can never leave two tick streams advancing the same session.

use std::time::Instant;

/// Upper bound on ticks reported per poll. If the loop stalls (terminal
/// suspended, debugger attached) the backlog beyond this is dropped rather
/// than replayed as a burst.
const MAX_TICKS_PER_POLL: u32 = 8;

#[derive(Debug)]
pub struct TickScheduler {
    tick_ms: u64,
    active: bool,
    last_poll: Option<Instant>,
    accumulator_ms: u64,
}

impl TickScheduler {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            active: false,
            last_poll: None,
            accumulator_ms: 0,
        }
    }

    /// Begin a fresh schedule, cancelling any previous one.
    pub fn start(&mut self) {
        self.active = true;
        self.last_poll = None;
        self.accumulator_ms = 0;
    }

    /// Stop scheduling ticks and drop any accumulated backlog.
    pub fn cancel(&mut self) {
        self.active = false;
        self.last_poll = None;
        self.accumulator_ms = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of ticks due now. See [`TickScheduler::poll_at`].
    pub fn poll(&mut self) -> u32 {
        self.poll_at(Instant::now())
    }

    /// Number of ticks due as of `now`, consuming them from the schedule.
    pub fn poll_at(&mut self, now: Instant) -> u32 {
        if !self.active {
            return 0;
        }
        if let Some(last) = self.last_poll {
            self.accumulator_ms += now.saturating_duration_since(last).as_millis() as u64;
        }
        self.last_poll = Some(now);

        let due = (self.accumulator_ms / self.tick_ms) as u32;
        self.accumulator_ms %= self.tick_ms;
        if due > MAX_TICKS_PER_POLL {
            MAX_TICKS_PER_POLL
        } else {
            due
        }
    }
}
