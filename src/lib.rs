//! Deterministic shift rostering engine.
//!
//! Assigns personnel to staffing locations across a bounded time horizon,
//! honoring per-location role quotas, a minimum rest period ("cooldown")
//! around every shift, and caller-pinned assignments that are preserved
//! verbatim. The engine is a single greedy pass with a priority rule —
//! no search, no backtracking: a location that cannot be staffed for a
//! slot is simply left empty there.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Role`, `Location`,
//!   `SchedulingWindow`, `TimeSlot`, `Schedule`, `SlotRecord`
//! - **`engine`**: Slot generation, availability ledger, manual pins,
//!   the greedy automatic pass, and schedule assembly
//! - **`validation`**: Request-construction checks (window sanity,
//!   duplicate ids, pin integrity) run before the engine
//! - **`store`**: The record-store collaborator interface with an
//!   in-memory implementation and JSON snapshots
//! - **`export`**: CSV spreadsheet rendering of a schedule
//! - **`lookup`**: Per-person duty lookup with adjacent-range merging
//!
//! # Architecture
//!
//! Data flows one way: slot generation → pin resolution and the greedy
//! pass (both consulting the availability ledger) → aggregation → caller.
//! Everything mutable lives inside one [`engine::RosterEngine::assign`]
//! invocation; the crate holds no global state and performs no I/O apart
//! from the explicit store/export helpers.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ernst et al. (2004), "Staff Scheduling and Rostering: A Review of
//!   Applications, Methods and Models"

pub mod engine;
pub mod export;
pub mod lookup;
pub mod models;
pub mod store;
pub mod validation;

pub use engine::{ManualPins, RosterEngine, RosterRequest};
pub use models::{Location, Role, Schedule, SchedulingWindow, SlotRecord, TimeSlot, Worker};
