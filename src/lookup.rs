//! Duty lookup by external identifier.
//!
//! The read-only surface a worker uses to find their own shifts: scan
//! saved schedules for atomic slots containing the worker with a given
//! external identifier, then merge adjacent slots at the same location
//! into continuous ranges so an 8h shift shows as one entry, not two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::store::SavedSchedule;

/// A continuous on-duty range at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRange {
    /// Location display name (id when the record carries no name).
    pub location: String,
    /// Range start (inclusive).
    pub start: DateTime<Utc>,
    /// Range end (exclusive).
    pub end: DateTime<Utc>,
}

/// Collects and merges all duty ranges for an external identifier.
///
/// Returns chronologically sorted ranges across every saved schedule;
/// empty when the identifier matches no worker or no assignment.
pub fn duties_for_external_id(saved: &[SavedSchedule], external_id: &str) -> Vec<DutyRange> {
    let mut ranges = Vec::new();

    for record in saved {
        let Some(worker) = record
            .workers
            .iter()
            .find(|w| w.external_id.as_deref() == Some(external_id))
        else {
            continue;
        };

        let names: HashMap<&str, &str> = record
            .locations
            .iter()
            .map(|l| {
                let title = if l.name.is_empty() { &l.id } else { &l.name };
                (l.id.as_str(), title.as_str())
            })
            .collect();

        for (slot, location_id) in record.schedule.assignments_for_worker(&worker.id) {
            let location = names.get(location_id).copied().unwrap_or(location_id);
            ranges.push(DutyRange {
                location: location.to_string(),
                start: slot.start,
                end: slot.end,
            });
        }
    }

    ranges.sort_by_key(|r| r.start);
    merge_adjacent(ranges)
}

/// Folds slot-sized ranges into continuous ones.
///
/// Two ranges merge when they are at the same location and the first ends
/// exactly where the second starts.
fn merge_adjacent(ranges: Vec<DutyRange>) -> Vec<DutyRange> {
    let mut merged: Vec<DutyRange> = Vec::new();

    for next in ranges {
        match merged.last_mut() {
            Some(current) if current.location == next.location && current.end == next.start => {
                current.end = next.end;
            }
            _ => merged.push(next),
        }
    }

    merged
}
