//! Input debouncing as an explicit, pollable timer.
//!
//! Rather than wrapping a callback in a closure with a hidden timer, the
//! [`Debouncer`] keeps the pending query and its deadline as plain state:
//! [`Debouncer::trigger`] re-arms the deadline and replaces the pending
//! query (last write wins, skipped queries are dropped outright), and
//! [`Debouncer::poll`] hands the query out once the quiet period has
//! elapsed. Time flows in through `poll`, so tests never sleep.

use crate::models::Query;
use std::time::{Duration, Instant};

/// Quiet period before a query burst settles.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Query>,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new query, replacing any pending one and restarting the
    /// quiet-period timer.
    pub fn trigger(&mut self, query: Query, now: Instant) {
        self.pending = Some(query);
        self.deadline = Some(now + self.delay);
    }

    /// True once the armed deadline has passed.
    pub fn poll_ready(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(d) if now >= d)
    }

    /// Take the settled query, at most once per armed deadline.
    pub fn poll(&mut self, now: Instant) -> Option<Query> {
        if self.poll_ready(now) {
            self.deadline = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending query without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}
