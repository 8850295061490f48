//! The rostering engine.
//!
//! A pure, synchronous, single-pass computation: partition the horizon
//! into atomic slots, honor the caller's manual pins, then greedily fill
//! every remaining `(slot, location)` pair. All mutable state (the
//! availability ledger, the assignment book, the priority set) is local
//! to one [`RosterEngine::assign`] call — independent requests can run
//! concurrently without sharing anything.
//!
//! The engine never fails on well-formed input. Understaffed pairs come
//! back as empty assignment sets, which callers may surface for human
//! attention; malformed requests are the request-construction layer's
//! responsibility (see [`crate::validation`]).
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use watchbill::engine::{RosterEngine, RosterRequest};
//! use watchbill::models::{Location, SchedulingWindow, Worker};
//!
//! let window = SchedulingWindow::new(
//!     Utc.with_ymd_and_hms(2025, 3, 31, 8, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2025, 3, 31, 16, 0, 0).unwrap(),
//! );
//! let workers = vec![Worker::manager("M1"), Worker::regular("R1")];
//! let locations = vec![Location::new("gate")
//!     .with_managers_needed(1)
//!     .with_regulars_needed(1)];
//!
//! let request = RosterRequest::new(window, workers, locations).with_cooldown_hours(0);
//! let schedule = RosterEngine::new().assign(&request);
//!
//! assert_eq!(schedule.slot_count(), 2);
//! assert_eq!(schedule.slots[0].workers_at("gate"), ["M1", "R1"]);
//! ```

mod aggregate;
mod assigner;
mod availability;
mod pins;
pub mod slots;

pub use availability::AvailabilityLedger;
pub use pins::{ManualPins, PrioritySet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Location, Schedule, SchedulingWindow, Worker};

/// Input container for one rostering run.
///
/// Carries everything the engine reads; nothing in it is mutated. The
/// cooldown travels with the request rather than living in any ambient
/// setting, so two requests with different cooldowns never interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// The horizon to cover.
    pub window: SchedulingWindow,
    /// Workers eligible for assignment.
    pub workers: Vec<Worker>,
    /// Locations to staff, in the order the automatic pass visits them.
    pub locations: Vec<Location>,
    /// Minimum rest in hours around every shift.
    pub cooldown_hours: u32,
    /// Caller-pinned assignments, honored verbatim.
    #[serde(default)]
    pub manual_pins: ManualPins,
}

impl RosterRequest {
    /// Creates a request with no cooldown and no pins.
    pub fn new(window: SchedulingWindow, workers: Vec<Worker>, locations: Vec<Location>) -> Self {
        Self {
            window,
            workers,
            locations,
            cooldown_hours: 0,
            manual_pins: ManualPins::new(),
        }
    }

    /// Sets the cooldown.
    pub fn with_cooldown_hours(mut self, hours: u32) -> Self {
        self.cooldown_hours = hours;
        self
    }

    /// Sets the manual pins.
    pub fn with_pins(mut self, pins: ManualPins) -> Self {
        self.manual_pins = pins;
        self
    }
}

/// Deterministic greedy rostering engine.
///
/// Stateless between calls; see the module docs for the pass structure.
#[derive(Debug, Clone, Default)]
pub struct RosterEngine;

impl RosterEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Computes a schedule for the request.
    ///
    /// Identical inputs (pins included) always produce identical output.
    pub fn assign(&self, request: &RosterRequest) -> Schedule {
        let unit = slots::atomic_unit_hours(&request.locations);
        let slot_seq = slots::generate_slots(&request.window, unit);
        debug!(
            slots = slot_seq.len(),
            unit_hours = unit,
            "generated atomic slots"
        );

        let mut ledger = AvailabilityLedger::new(request.cooldown_hours);
        let mut book = aggregate::AssignmentBook::new();

        let priority = pins::resolve(
            &request.manual_pins,
            &slot_seq,
            &request.locations,
            unit,
            &mut ledger,
            &mut book,
        );
        debug!(pinned_workers = priority.len(), "resolved manual pins");

        assigner::fill(
            &slot_seq,
            &request.workers,
            &request.locations,
            unit,
            &priority,
            &mut ledger,
            &mut book,
        );

        aggregate::collect(&slot_seq, &request.locations, &book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, h, 0, 0).unwrap()
    }

    fn staff() -> Vec<Worker> {
        vec![
            Worker::manager("M1").with_name("Mika"),
            Worker::manager("M2").with_name("Noa"),
            Worker::regular("R1").with_name("Avi"),
            Worker::regular("R2").with_name("Tal"),
        ]
    }

    fn gate() -> Location {
        Location::new("gate")
            .with_name("Main Gate")
            .with_managers_needed(1)
            .with_regulars_needed(1)
    }

    fn pin_at(start: DateTime<Utc>, location: &str, workers: &[&str]) -> ManualPins {
        let mut pins = ManualPins::new();
        pins.entry(start).or_default().insert(
            location.to_string(),
            workers.iter().map(|w| w.to_string()).collect(),
        );
        pins
    }

    #[test]
    fn test_cooldown_forces_rotation_across_slots() {
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(8)),
            staff(),
            vec![gate()],
        )
        .with_cooldown_hours(8);

        let schedule = RosterEngine::new().assign(&request);

        assert_eq!(schedule.slot_count(), 2);
        assert_eq!(schedule.slots[0].workers_at("gate"), ["M1", "R1"]);
        assert_eq!(schedule.slots[1].workers_at("gate"), ["M2", "R2"]);
    }

    #[test]
    fn test_pins_appear_verbatim_and_are_never_overwritten() {
        let pins = pin_at(at(0), "gate", &["M2", "R2"]);
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(8)),
            staff(),
            vec![gate()],
        )
        .with_cooldown_hours(0)
        .with_pins(pins);

        let schedule = RosterEngine::new().assign(&request);

        assert_eq!(schedule.slots[0].workers_at("gate"), ["M2", "R2"]);
        // The automatic pass fills the other slot around the pin.
        assert!(!schedule.slots[1].workers_at("gate").is_empty());
    }

    #[test]
    fn test_pin_propagates_across_full_shift_length() {
        let locations = vec![
            Location::new("post")
                .with_regulars_needed(1)
                .with_slot_duration(8),
            Location::new("spot").with_regulars_needed(1),
        ];
        // Unit = max(4, min(8, 4)) = 4; the pinned 8h shift spans 2 slots.
        let pins = pin_at(at(0), "post", &["R1"]);
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(8)),
            staff(),
            locations,
        )
        .with_cooldown_hours(8)
        .with_pins(pins);

        let schedule = RosterEngine::new().assign(&request);

        assert_eq!(schedule.slots[0].workers_at("post"), ["R1"]);
        assert_eq!(schedule.slots[1].workers_at("post"), ["R1"]);
        // R1 is busy and cooling down, so "spot" falls to R2 both slots.
        assert_eq!(schedule.slots[0].workers_at("spot"), ["R2"]);
    }

    #[test]
    fn test_pinned_workers_preferred_by_automatic_pass() {
        // The pin covers slot 0 only (4h location); with no cooldown the
        // pinned pair is eligible again at slot 1 and preferred over the
        // earlier-listed M1/R1.
        let pins = pin_at(at(0), "gate", &["M2", "R2"]);
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(8)),
            staff(),
            vec![gate()],
        )
        .with_cooldown_hours(0)
        .with_pins(pins);

        let schedule = RosterEngine::new().assign(&request);

        assert_eq!(schedule.slots[1].workers_at("gate"), ["M2", "R2"]);
    }

    #[test]
    fn test_identical_requests_yield_identical_schedules() {
        let pins = pin_at(at(4), "gate", &["M1", "R2"]);
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(16)),
            staff(),
            vec![gate(), Location::new("tower").with_regulars_needed(1)],
        )
        .with_cooldown_hours(8)
        .with_pins(pins);

        let engine = RosterEngine::new();
        assert_eq!(engine.assign(&request), engine.assign(&request));
    }

    #[test]
    fn test_no_locations_defaults_to_four_hour_slots() {
        let request =
            RosterRequest::new(SchedulingWindow::new(at(0), at(12)), staff(), Vec::new());

        let schedule = RosterEngine::new().assign(&request);

        assert_eq!(schedule.slot_count(), 3);
        assert!(schedule.slots.iter().all(|rec| rec.assignments.is_empty()));
    }

    #[test]
    fn test_no_worker_serves_two_locations_in_one_slot() {
        let locations = vec![
            Location::new("a").with_regulars_needed(1),
            Location::new("b").with_regulars_needed(1),
            Location::new("c").with_regulars_needed(1),
        ];
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(16)),
            staff(),
            locations,
        )
        .with_cooldown_hours(0);

        let schedule = RosterEngine::new().assign(&request);

        for rec in &schedule.slots {
            let mut seen = std::collections::HashSet::new();
            for ids in rec.assignments.values() {
                for id in ids {
                    assert!(seen.insert(id.clone()), "{id} doubled in {:?}", rec.start);
                }
            }
        }
    }

    #[test]
    fn test_schedule_is_chronological() {
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(20)),
            staff(),
            vec![gate()],
        )
        .with_cooldown_hours(8);

        let schedule = RosterEngine::new().assign(&request);
        assert!(schedule.is_chronological());
        assert_eq!(schedule.slot_count(), 5);
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let pins = pin_at(at(0), "gate", &["M1"]);
        let request = RosterRequest::new(
            SchedulingWindow::new(at(0), at(8)),
            staff(),
            vec![gate()],
        )
        .with_cooldown_hours(8)
        .with_pins(pins);

        let json = serde_json::to_string(&request).unwrap();
        let back: RosterRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(back.cooldown_hours, 8);
        assert_eq!(back.manual_pins.len(), 1);
        assert_eq!(
            RosterEngine::new().assign(&back),
            RosterEngine::new().assign(&request)
        );
    }
}
