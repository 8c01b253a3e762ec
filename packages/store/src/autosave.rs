//! Debounced auto-save scheduling.
//!
//! At most one save is pending at a time. Every edit reschedules it, which
//! supersedes whatever was pending before. The UI spawns a sleeper per
//! [`Ticket`] and only the sleeper holding the latest ticket may fire; code
//! driven by an explicit clock uses [`Debouncer::take_due`] instead.

use std::time::Duration;

/// Handle for one scheduled firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug)]
struct Pending {
    ticket: Ticket,
    due_at: i64,
}

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    next: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule (or reschedule) a firing `delay` after `now` (ms).
    pub fn schedule(&mut self, now: i64) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.pending = Some(Pending {
            ticket,
            due_at: now + self.delay.as_millis() as i64,
        });
        ticket
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<i64> {
        self.pending.map(|p| p.due_at)
    }

    /// Consume the pending firing if `ticket` is still the latest one.
    pub fn claim(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending firing if its deadline has passed.
    pub fn take_due(&mut self, now: i64) -> bool {
        match self.pending {
            Some(p) if now >= p.due_at => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
