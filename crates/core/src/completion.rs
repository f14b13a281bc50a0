//! Completion state machine for media records.
//!
//! Two states, incomplete and completed. Entering `completed` stamps the
//! completion date; leaving it clears the date. `completed_date` is always
//! derived here and never taken from client input.

use serde::Serialize;

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub completed: bool,
    pub completed_date: Option<Timestamp>,
}

impl Completion {
    /// State of a freshly created record.
    pub fn initial(completed: bool, now: Timestamp) -> Self {
        Self {
            completed,
            completed_date: completed.then_some(now),
        }
    }

    /// Rebuild from stored columns. The pair is kept as-is even when it
    /// violates the date/flag invariant; [`Completion::set`] repairs it on
    /// the next write.
    pub fn from_stored(completed: bool, completed_date: Option<Timestamp>) -> Self {
        Self {
            completed,
            completed_date,
        }
    }

    /// Apply a requested `completed` value.
    ///
    /// - incomplete -> completed: `completed_date := now`
    /// - completed -> incomplete: `completed_date := None`
    /// - unchanged: the date is kept, except a completed record without a
    ///   date is stamped and an incomplete record with one is cleared.
    pub fn set(self, completed: bool, now: Timestamp) -> Self {
        let completed_date = match (self.completed, completed) {
            (false, true) => Some(now),
            (true, true) => Some(self.completed_date.unwrap_or(now)),
            (_, false) => None,
        };
        Self {
            completed,
            completed_date,
        }
    }

    /// Whether the flag and the date agree.
    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_date.is_some()
    }
}
