//! Pending-write scheduling.
//!
//! `PendingWrite` holds at most one payload. Scheduling replaces whatever was
//! outstanding and restarts the quiet window, so only the last payload of a
//! burst is ever handed out. Nothing runs in the background: the owner polls
//! with the current time (or flushes when the session ends).

use chrono::{DateTime, Local, TimeDelta};

#[derive(Debug)]
struct Scheduled<T> {
    due: DateTime<Local>,
    payload: T,
}

#[derive(Debug)]
pub struct PendingWrite<T> {
    delay: TimeDelta,
    pending: Option<Scheduled<T>>,
}

impl<T> PendingWrite<T> {
    pub fn new(delay: TimeDelta) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> TimeDelta {
        self.delay
    }

    /// Schedule `payload` to fire `delay` after `now`, replacing any
    /// outstanding payload. Returns true if one was replaced.
    /// A due time past the end of the calendar fires on the next poll.
    pub fn schedule(&mut self, now: DateTime<Local>, payload: T) -> bool {
        let due = now.checked_add_signed(self.delay).unwrap_or(now);
        self.pending.replace(Scheduled { due, payload }).is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<DateTime<Local>> {
        self.pending.as_ref().map(|s| s.due)
    }

    /// Hand out the payload if its quiet window has elapsed at `now`.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<T> {
        let ready = self.pending.as_ref().is_some_and(|s| s.due <= now);
        if ready { self.flush() } else { None }
    }

    /// Hand out the payload regardless of its due time.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|s| s.payload)
    }

    /// Drop the outstanding payload. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
