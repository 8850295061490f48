//! Location (staffed post) model.
//!
//! A location is a post that must be staffed: it declares how many managers
//! and regulars it needs at any time and how long one shift there lasts.

use serde::{Deserialize, Serialize};

/// Smallest shift length the engine reasons about, in hours.
///
/// Location durations below this are invalid; the atomic slot unit is
/// never smaller than this regardless of the locations supplied.
pub const MIN_SLOT_HOURS: u32 = 4;

/// A location requiring staff.
///
/// Immutable during a rostering run. The role quotas are per shift: each
/// assignment to this location must contain exactly `managers_needed`
/// managers and `regulars_needed` regulars, or nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Unique location identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Managers required per shift.
    pub managers_needed: u32,
    /// Regulars required per shift.
    pub regulars_needed: u32,
    /// Shift length in hours (a multiple of the atomic unit, at least
    /// [`MIN_SLOT_HOURS`]).
    pub slot_duration_hours: u32,
}

impl Location {
    /// Creates a new location with the minimum shift length and no quotas.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            managers_needed: 0,
            regulars_needed: 0,
            slot_duration_hours: MIN_SLOT_HOURS,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the manager quota.
    pub fn with_managers_needed(mut self, count: u32) -> Self {
        self.managers_needed = count;
        self
    }

    /// Sets the regular quota.
    pub fn with_regulars_needed(mut self, count: u32) -> Self {
        self.regulars_needed = count;
        self
    }

    /// Sets the shift length in hours.
    pub fn with_slot_duration(mut self, hours: u32) -> Self {
        self.slot_duration_hours = hours;
        self
    }

    /// Total staff required per shift.
    #[inline]
    pub fn total_needed(&self) -> u32 {
        self.managers_needed + self.regulars_needed
    }

    /// Number of atomic slots one shift here spans, for a given atomic unit.
    pub fn slots_to_fill(&self, atomic_unit_hours: u32) -> usize {
        self.slot_duration_hours.div_ceil(atomic_unit_hours) as usize
    }
}
