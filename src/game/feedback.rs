//! Submit feedback and its expiry timer.
//!
//! Every submit shows `Correct` or `Retry` for a fixed delay. Only the most
//! recent submit's expiry may clear the message: scheduling new feedback
//! cancels whatever was pending, and a stale expiry callback is ignored.
//!
//! Time comes from a [`Clock`] so hosts can drive it from a real event loop
//! (poll on each frame, or deliver [`TimerTicket`]s from their own delayed
//! callbacks) and tests can step it by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome message shown after a submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The selection was a Proset.
    Correct,
    /// The selection was not a Proset (including an empty selection).
    Retry,
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock. Clones share the same time.
///
/// ```
/// use std::time::Duration;
/// use proset::game::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
///
/// handle.advance(Duration::from_millis(500));
/// assert_eq!(clock.now() - start, Duration::from_millis(500));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifies one scheduled expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerTicket(pub u64);

#[derive(Clone, Copy, Debug)]
struct Pending {
    feedback: Feedback,
    deadline: Instant,
    ticket: TimerTicket,
}

/// Fire-once, reschedulable expiry for submit feedback.
#[derive(Clone, Debug)]
pub struct FeedbackTimer {
    delay: Duration,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl FeedbackTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Show `feedback` until `now + delay`, cancelling any earlier expiry.
    pub fn schedule(&mut self, feedback: Feedback, now: Instant) -> TimerTicket {
        let ticket = TimerTicket(self.next_ticket);
        self.next_ticket += 1;

        if let Some(old) = self.pending.replace(Pending {
            feedback,
            deadline: now + self.delay,
            ticket,
        }) {
            debug!(cancelled = old.ticket.0, ticket = ticket.0, "Rescheduled feedback expiry");
        }
        ticket
    }

    /// Drop any pending feedback. Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Current feedback, clearing it first if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Feedback> {
        let pending = self.pending?;
        if now >= pending.deadline {
            debug!(ticket = pending.ticket.0, "Feedback expired");
            self.pending = None;
            return None;
        }
        Some(pending.feedback)
    }

    /// Deliver an expiry callback. Only the most recently scheduled ticket
    /// clears feedback; stale tickets are ignored and return false.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                debug!(ticket = ticket.0, "Feedback expiry fired");
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Ticket of the pending expiry, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<TimerTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// When the pending feedback expires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }
}
