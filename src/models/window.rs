//! Scheduling window and atomic time slots.
//!
//! The horizon is a half-open interval `[start, end)` partitioned into
//! atomic slots. Slots carry structured timestamps from the moment they
//! are generated; nothing downstream ever re-parses a textual key to
//! recover ordering.
//!
//! # Time Model
//! All timestamps are `chrono::DateTime<Utc>`; durations are whole hours.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The bounded horizon one rostering run covers.
///
/// `end` must be after `start`; the request-construction layer checks this
/// (together with horizon divisibility by the atomic unit) before the
/// engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingWindow {
    /// Horizon start (inclusive).
    pub start: DateTime<Utc>,
    /// Horizon end (exclusive).
    pub end: DateTime<Utc>,
}

impl SchedulingWindow {
    /// Creates a new window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Horizon length in whole hours (negative-length windows yield 0).
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours().max(0)
    }
}

/// One atomic slot of the partitioned horizon.
///
/// Slots are contiguous and non-overlapping; every slot except possibly
/// the last has exactly the atomic unit's length, and the last is clipped
/// to the window end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Position in the generated sequence (0-indexed).
    pub index: usize,
    /// Slot start (inclusive).
    pub start: DateTime<Utc>,
    /// Slot end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(index: usize, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { index, start, end }
    }

    /// Slot length.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether this slot overlaps the half-open interval `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }
}
