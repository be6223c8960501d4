//! Delay-and-collapse debouncing with an owned, cancellable deadline.
//!
//! Instead of a timer callback capturing its owner, the debouncer holds the
//! pending value and its deadline; the shell polls it every event-loop
//! iteration with the current time. Re-triggering before the deadline
//! replaces both value and deadline, so only the last trigger within any
//! quiet window ever fires, exactly once. Dropping the debouncer (or
//! calling [`Debouncer::cancel`]) discards the pending value, which is the
//! teardown guarantee: nothing can fire against an owner that is gone.

use std::time::{Duration, Instant};

/// Collapses a burst of triggers into a single delayed value.
///
/// Generic over the pending payload; the query store uses
/// `Debouncer<String>` for search text.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet-window length.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a trigger at time `now`, replacing any pending value.
    ///
    /// The value becomes ready `delay` after the *last* trigger.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    ///
    /// Returns `Some` at most once per trigger burst; afterwards the
    /// debouncer is disarmed until the next [`trigger`](Self::trigger).
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    /// Take the pending value immediately, ignoring the deadline.
    ///
    /// Used when the user forces a commit (Enter in the search box).
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Discard any pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a trigger is waiting for its deadline.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
