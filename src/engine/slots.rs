//! Atomic unit derivation and slot generation.
//!
//! The atomic unit is the shortest shift length among the supplied
//! locations, floored at [`MIN_SLOT_HOURS`]. The horizon is partitioned
//! into contiguous slots of that length, the last one clipped to the
//! window end. Generation is a pure function of its inputs: the same
//! window and locations always yield the identical slot sequence.

use chrono::Duration;

use crate::models::{Location, SchedulingWindow, TimeSlot, MIN_SLOT_HOURS};

/// Derives the atomic slot unit in hours.
///
/// `max(MIN_SLOT_HOURS, min(location durations))`; falls back to
/// [`MIN_SLOT_HOURS`] when no locations are supplied.
pub fn atomic_unit_hours(locations: &[Location]) -> u32 {
    locations
        .iter()
        .map(|loc| loc.slot_duration_hours)
        .min()
        .map(|shortest| shortest.max(MIN_SLOT_HOURS))
        .unwrap_or(MIN_SLOT_HOURS)
}

/// Partitions the window into atomic slots of `unit_hours`.
///
/// Slots step from `window.start` by the unit; the final slot's end is
/// clipped to `window.end` when the unit does not divide the horizon.
/// Returns an empty sequence for an empty or inverted window.
pub fn generate_slots(window: &SchedulingWindow, unit_hours: u32) -> Vec<TimeSlot> {
    let step = Duration::hours(i64::from(unit_hours));
    let mut slots = Vec::new();
    let mut current = window.start;

    while current < window.end {
        let end = (current + step).min(window.end);
        slots.push(TimeSlot::new(slots.len(), current, end));
        current = current + step;
    }

    slots
}
