//! Owned, cancellable deadline handles pumped by the host.
//!
//! Neither timer spawns anything: the owner calls `poll(now)` from its own
//! update path and the handle reports which deadline (if any) has come due.
//! Dropping or cancelling a handle guarantees it never fires again.

use web_time::{Duration, Instant};

/// A fixed-interval recurring deadline.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl RepeatingTimer {
    /// Timer whose first tick is one `interval` after `now`.
    pub fn start(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_fire: Some(now + interval),
        }
    }

    /// Fire at most one due tick, returning the instant it was due.
    ///
    /// Call in a loop to catch up after a long gap; each returned instant is
    /// one interval after the previous one.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        let due = self.next_fire.filter(|&due| now >= due)?;
        self.next_fire = Some(due + self.interval);
        Some(due)
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    /// Whether further ticks are scheduled.
    pub fn is_active(&self) -> bool {
        self.next_fire.is_some()
    }
}

/// A single-shot deadline.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
    deadline: Option<Instant>,
}

impl Timeout {
    /// Unscheduled timeout.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timeout for `at`.
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    /// Fire if due, returning the deadline. Disarms itself on firing.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        let due = self.deadline.filter(|&due| now >= due)?;
        self.deadline = None;
        Some(due)
    }

    /// Disarm without firing. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the timeout is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
