//! Manual pin resolution.
//!
//! Pins are caller-supplied, must-honor assignments keyed by atomic slot
//! start and location id. They are resolved before the automatic pass in
//! slot-chronological order: each pin's worker set is projected across
//! every atomic slot the location's shift length spans (bounded by the
//! horizon), the workers are marked busy for each projected slot, and
//! their ids join the priority set the automatic pass prefers later.
//!
//! Pin contents are the caller's contract: quota or double-booking
//! violations inside pins are not detected here (the request validation
//! layer reports them before the engine runs). Keys that match no
//! generated slot or no known location are skipped with a warning — the
//! engine itself never fails.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::warn;

use super::aggregate::AssignmentBook;
use super::availability::AvailabilityLedger;
use crate::models::{Location, TimeSlot};

/// Caller-pinned assignments: atomic slot start → location id → worker ids.
///
/// `BTreeMap` keying makes iteration chronological (outer) and
/// deterministic (inner); the worker lists keep the caller's order
/// verbatim.
pub type ManualPins = BTreeMap<DateTime<Utc>, BTreeMap<String, Vec<String>>>;

/// Ids of workers referenced by any pin, preferred by the automatic pass.
pub type PrioritySet = HashSet<String>;

/// Resolves all pins into the book and ledger; returns the priority set.
pub fn resolve(
    pins: &ManualPins,
    slots: &[TimeSlot],
    locations: &[Location],
    unit_hours: u32,
    ledger: &mut AvailabilityLedger,
    book: &mut AssignmentBook,
) -> PrioritySet {
    let slot_by_start: HashMap<DateTime<Utc>, usize> =
        slots.iter().map(|s| (s.start, s.index)).collect();
    let location_by_id: HashMap<&str, &Location> =
        locations.iter().map(|l| (l.id.as_str(), l)).collect();

    let mut priority = PrioritySet::new();

    for (pin_start, by_location) in pins {
        let Some(&first_index) = slot_by_start.get(pin_start) else {
            warn!(%pin_start, "pin does not match any generated slot start, skipping");
            continue;
        };

        for (location_id, worker_ids) in by_location {
            let Some(location) = location_by_id.get(location_id.as_str()) else {
                warn!(%location_id, "pin references unknown location, skipping");
                continue;
            };

            let span_end = (first_index + location.slots_to_fill(unit_hours)).min(slots.len());
            for slot in &slots[first_index..span_end] {
                book.record(slot.index, location_id, worker_ids.clone());
                for worker_id in worker_ids {
                    ledger.mark_busy(worker_id, slot.start, slot.end);
                }
            }

            priority.extend(worker_ids.iter().cloned());
        }
    }

    priority
}
