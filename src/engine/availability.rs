//! Per-worker availability ledger.
//!
//! Records busy intervals as assignments are made and answers whether a
//! worker is free for a candidate interval. The cooldown (minimum rest)
//! expands every recorded interval on BOTH sides: a worker is ineligible
//! within `cooldown` hours before a recorded shift as well as after it.
//! The before-side expansion is inherited behavior, kept deliberately —
//! see `test_cooldown_blocks_before_earlier_shift`.
//!
//! Pure in-memory bookkeeping: no call ever fails, lists are never
//! merged or compacted (they stay bounded by the number of slots in the
//! horizon).

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// A recorded busy interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BusyInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Tracks which workers are busy when, honoring the cooldown.
///
/// Local to one engine invocation; never shared across runs.
#[derive(Debug, Clone)]
pub struct AvailabilityLedger {
    cooldown: Duration,
    busy: HashMap<String, Vec<BusyInterval>>,
}

impl AvailabilityLedger {
    /// Creates an empty ledger with the given cooldown in hours.
    pub fn new(cooldown_hours: u32) -> Self {
        Self {
            cooldown: Duration::hours(i64::from(cooldown_hours)),
            busy: HashMap::new(),
        }
    }

    /// Whether a worker is free for the whole interval `[start, end)`.
    ///
    /// False iff some recorded interval `(bs, be)` satisfies
    /// `start < be + cooldown && end > bs - cooldown`.
    pub fn is_available(
        &self,
        worker_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        match self.busy.get(worker_id) {
            None => true,
            Some(intervals) => intervals
                .iter()
                .all(|iv| start >= iv.end + self.cooldown || end <= iv.start - self.cooldown),
        }
    }

    /// Records `[start, end)` as busy for a worker.
    pub fn mark_busy(&mut self, worker_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.busy
            .entry(worker_id.to_string())
            .or_default()
            .push(BusyInterval { start, end });
    }

    /// Number of intervals recorded for a worker.
    pub fn interval_count(&self, worker_id: &str) -> usize {
        self.busy.get(worker_id).map_or(0, Vec::len)
    }
}
