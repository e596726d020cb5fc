//! Deterministic timer scheduling.
//!
//! Widgets never sleep. A delayed revert is scheduled here against a
//! virtual clock and delivered back to the page when the clock is advanced,
//! either by a host following wall time or by a test stepping it directly.

use std::fmt;
use std::time::Duration;

use log::trace;

/// Handle for a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Duration,
    payload: T,
}

/// A set of one-shot timers on a virtual clock.
///
/// Timers fire in deadline order; timers sharing a deadline fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time, measured from creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `after` from now.
    pub fn schedule(&mut self, after: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + after;
        trace!("Scheduled {} at {:?}", id, due);
        self.pending.push(Pending { id, due, payload });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            trace!("Cancelled {}", id);
        }
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Absolute time of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;

        let fired = self.pending.remove(index);
        if fired.due > self.now {
            self.now = fired.due;
        }
        trace!("Fired {} at {:?}", fired.id, self.now);
        Some((fired.id, fired.payload))
    }

    /// Move the clock forward to `time` without firing anything.
    /// Moving backwards is ignored.
    pub fn set_now(&mut self, time: Duration) {
        if time > self.now {
            self.now = time;
        }
    }

    /// Advance the clock by `by`, returning every payload that came due in
    /// firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some((_, payload)) = self.pop_due(until) {
            fired.push(payload);
        }
        self.set_now(until);
        fired
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
