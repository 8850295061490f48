//! Assignment bookkeeping and final schedule assembly.
//!
//! Both assignment passes (pins, then the automatic fill) write into one
//! [`AssignmentBook`] keyed by `(slot index, location id)`. Assembly walks
//! the generated slots in order and attaches every location's entry, so
//! the output is chronological by construction; records are still sorted
//! by start at the end so the guarantee holds regardless of how the book
//! was filled.

use std::collections::HashMap;

use crate::models::{Location, Schedule, SlotRecord, TimeSlot};

/// Assignments accumulated during one engine run.
///
/// A present-but-empty entry is meaningful: it records that the automatic
/// pass visited the pair and could not staff it.
#[derive(Debug, Default)]
pub struct AssignmentBook {
    by_slot: HashMap<usize, HashMap<String, Vec<String>>>,
}

impl AssignmentBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pair already has an entry (including an empty one).
    pub fn is_covered(&self, slot_index: usize, location_id: &str) -> bool {
        self.by_slot
            .get(&slot_index)
            .is_some_and(|locs| locs.contains_key(location_id))
    }

    /// Records worker ids for a pair, replacing any previous entry.
    pub fn record(&mut self, slot_index: usize, location_id: &str, worker_ids: Vec<String>) {
        self.by_slot
            .entry(slot_index)
            .or_default()
            .insert(location_id.to_string(), worker_ids);
    }

    /// Records that a pair was visited but could not be staffed.
    pub fn record_unfilled(&mut self, slot_index: usize, location_id: &str) {
        self.record(slot_index, location_id, Vec::new());
    }

    /// Worker ids recorded for a pair, if any entry exists.
    pub fn get(&self, slot_index: usize, location_id: &str) -> Option<&[String]> {
        self.by_slot
            .get(&slot_index)
            .and_then(|locs| locs.get(location_id))
            .map(Vec::as_slice)
    }
}

/// Assembles the final schedule from the generated slots and the book.
///
/// Every location appears in every record; pairs the book never saw get
/// an empty set.
pub fn collect(slots: &[TimeSlot], locations: &[Location], book: &AssignmentBook) -> Schedule {
    let mut records: Vec<SlotRecord> = slots
        .iter()
        .map(|slot| {
            let mut record = SlotRecord::new(slot.start, slot.end);
            for loc in locations {
                let assigned = book
                    .get(slot.index, &loc.id)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                record.assignments.insert(loc.id.clone(), assigned);
            }
            record
        })
        .collect();

    records.sort_by_key(|rec| rec.start);
    Schedule { slots: records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, h, 0, 0).unwrap()
    }

    fn slot(index: usize, start_h: u32) -> TimeSlot {
        TimeSlot::new(index, at(start_h), at(start_h + 4))
    }

    #[test]
    fn test_record_and_coverage() {
        let mut book = AssignmentBook::new();
        assert!(!book.is_covered(0, "gate"));

        book.record(0, "gate", vec!["W1".into()]);
        assert!(book.is_covered(0, "gate"));
        assert_eq!(book.get(0, "gate"), Some(&["W1".to_string()][..]));

        // An unfilled entry still counts as covered.
        book.record_unfilled(1, "gate");
        assert!(book.is_covered(1, "gate"));
        assert_eq!(book.get(1, "gate"), Some(&[][..]));
    }

    #[test]
    fn test_collect_attaches_every_location() {
        let slots = vec![slot(0, 8), slot(1, 12)];
        let locations = vec![Location::new("gate"), Location::new("tower")];
        let mut book = AssignmentBook::new();
        book.record(0, "gate", vec!["W1".into()]);

        let schedule = collect(&slots, &locations, &book);
        assert_eq!(schedule.slot_count(), 2);
        assert_eq!(schedule.slots[0].workers_at("gate"), ["W1"]);
        assert!(schedule.slots[0].workers_at("tower").is_empty());
        assert!(schedule.slots[1].workers_at("gate").is_empty());
    }

    #[test]
    fn test_collect_is_chronological() {
        // Slots supplied out of order still come out sorted.
        let slots = vec![slot(1, 12), slot(0, 8)];
        let locations = vec![Location::new("gate")];
        let book = AssignmentBook::new();

        let schedule = collect(&slots, &locations, &book);
        assert!(schedule.is_chronological());
        assert_eq!(schedule.slots[0].start, at(8));
    }

    #[test]
    fn test_collect_empty_inputs() {
        let schedule = collect(&[], &[], &AssignmentBook::new());
        assert!(schedule.is_empty());
    }
}
