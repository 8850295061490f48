//! Schedule (output) model.
//!
//! A schedule is the full chronological sequence of slot records produced
//! by one rostering run: one record per atomic slot, each carrying the
//! worker ids assigned to every location for that slot. Empty assignment
//! sets are a normal outcome, not an error — they mark slots a location
//! could not be staffed for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Assignments for a single atomic slot.
///
/// `assignments` maps location id to the ordered worker ids on duty there
/// during `[start, end)`. Every location of the run appears as a key;
/// an empty list means the location is unstaffed for this slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Slot start (inclusive).
    pub start: DateTime<Utc>,
    /// Slot end (exclusive).
    pub end: DateTime<Utc>,
    /// Location id → ordered worker ids.
    pub assignments: BTreeMap<String, Vec<String>>,
}

impl SlotRecord {
    /// Creates a record with no assignments.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            assignments: BTreeMap::new(),
        }
    }

    /// Worker ids assigned to a location in this slot (empty if none).
    pub fn workers_at(&self, location_id: &str) -> &[String] {
        self.assignments
            .get(location_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The location this worker is on duty at during this slot, if any.
    pub fn location_of(&self, worker_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == worker_id))
            .map(|(loc, _)| loc.as_str())
    }
}

/// A complete roster: chronological slot records covering the horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Slot records in chronological order.
    pub slots: Vec<SlotRecord>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of atomic slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the schedule covers no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether slot records are strictly ordered by start time.
    pub fn is_chronological(&self) -> bool {
        self.slots.windows(2).all(|w| w[0].start < w[1].start)
    }

    /// All `(record, worker ids)` pairs for a location, in slot order.
    ///
    /// Slots where the location is unstaffed are skipped.
    pub fn assignments_for_location<'a>(
        &'a self,
        location_id: &str,
    ) -> Vec<(&'a SlotRecord, &'a [String])> {
        self.slots
            .iter()
            .map(|rec| (rec, rec.workers_at(location_id)))
            .filter(|(_, ids)| !ids.is_empty())
            .collect()
    }

    /// All `(record, location id)` pairs where a worker is on duty.
    pub fn assignments_for_worker<'a>(
        &'a self,
        worker_id: &str,
    ) -> Vec<(&'a SlotRecord, &'a str)> {
        self.slots
            .iter()
            .filter_map(|rec| rec.location_of(worker_id).map(|loc| (rec, loc)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, h, 0, 0).unwrap()
    }

    fn sample() -> Schedule {
        let mut first = SlotRecord::new(at(8), at(12));
        first
            .assignments
            .insert("gate".into(), vec!["M1".into(), "R1".into()]);
        first.assignments.insert("tower".into(), Vec::new());

        let mut second = SlotRecord::new(at(12), at(16));
        second.assignments.insert("gate".into(), vec!["R2".into()]);
        second.assignments.insert("tower".into(), vec!["M1".into()]);

        Schedule {
            slots: vec![first, second],
        }
    }

    #[test]
    fn test_workers_at() {
        let s = sample();
        assert_eq!(s.slots[0].workers_at("gate"), ["M1", "R1"]);
        assert!(s.slots[0].workers_at("tower").is_empty());
        assert!(s.slots[0].workers_at("nowhere").is_empty());
    }

    #[test]
    fn test_location_of() {
        let s = sample();
        assert_eq!(s.slots[0].location_of("M1"), Some("gate"));
        assert_eq!(s.slots[1].location_of("M1"), Some("tower"));
        assert_eq!(s.slots[0].location_of("R2"), None);
    }

    #[test]
    fn test_assignments_for_location_skips_empty() {
        let s = sample();
        let gate = s.assignments_for_location("gate");
        assert_eq!(gate.len(), 2);
        let tower = s.assignments_for_location("tower");
        assert_eq!(tower.len(), 1);
        assert_eq!(tower[0].1, ["M1"]);
    }

    #[test]
    fn test_assignments_for_worker() {
        let s = sample();
        let duty = s.assignments_for_worker("M1");
        assert_eq!(duty.len(), 2);
        assert_eq!(duty[0].1, "gate");
        assert_eq!(duty[1].1, "tower");
        assert!(s.assignments_for_worker("ghost").is_empty());
    }

    #[test]
    fn test_is_chronological() {
        let s = sample();
        assert!(s.is_chronological());

        let mut reversed = s.clone();
        reversed.slots.reverse();
        assert!(!reversed.is_chronological());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.slot_count(), 0);
        assert!(s.is_chronological());
    }
}
