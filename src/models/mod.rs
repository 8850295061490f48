//! Rostering domain models.
//!
//! Core data types for describing a rostering problem and its solution:
//! who can serve ([`Worker`]), where staff is needed ([`Location`]), the
//! horizon being covered ([`SchedulingWindow`], [`TimeSlot`]), and the
//! computed roster ([`Schedule`], [`SlotRecord`]).
//!
//! All types are plain serde-serializable data; the engine in
//! [`crate::engine`] never mutates workers or locations.

mod location;
mod schedule;
mod window;
mod worker;

pub use location::{Location, MIN_SLOT_HOURS};
pub use schedule::{Schedule, SlotRecord};
pub use window::{SchedulingWindow, TimeSlot};
pub use worker::{Role, Worker};
