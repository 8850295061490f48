//! Record store collaborator.
//!
//! The engine itself owns no records: workers, locations, the cooldown
//! setting, and finished schedules live behind [`RosterStore`]. This
//! module provides the interface plus an in-memory implementation with
//! JSON snapshot persistence, enough for embedders and tests; production
//! deployments put a real database behind the same trait.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{Location, Schedule, SchedulingWindow, Worker};

/// Cooldown applied when no setting was ever stored.
pub const DEFAULT_COOLDOWN_HOURS: u32 = 8;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schedule not found: {0}")]
    NotFound(String),
}

/// Store result alias.
pub type StoreResult<T> = Result<T, StoreError>;

/// A schedule persisted together with the inputs that produced it.
///
/// Bundling the worker and location sets keeps saved schedules
/// self-contained: display, export, and lookup never need the live
/// records, which may have changed since the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSchedule {
    /// Store-assigned identifier.
    pub id: String,
    /// The horizon the schedule covers.
    pub window: SchedulingWindow,
    /// Workers that participated in the run.
    pub workers: Vec<Worker>,
    /// Locations staffed by the run, in display/column order.
    pub locations: Vec<Location>,
    /// The computed roster.
    pub schedule: Schedule,
}

/// The record store the rostering surfaces are built on.
pub trait RosterStore {
    /// All workers on file.
    fn list_workers(&self) -> StoreResult<Vec<Worker>>;

    /// All locations on file.
    fn list_locations(&self) -> StoreResult<Vec<Location>>;

    /// The configured cooldown in hours.
    fn cooldown_hours(&self) -> StoreResult<u32>;

    /// Persists a computed schedule; returns its assigned id.
    fn save_schedule(
        &mut self,
        window: SchedulingWindow,
        workers: Vec<Worker>,
        locations: Vec<Location>,
        schedule: Schedule,
    ) -> StoreResult<String>;

    /// Fetches one saved schedule by id.
    fn get_schedule(&self, id: &str) -> StoreResult<SavedSchedule>;

    /// All saved schedules, oldest first.
    fn list_schedules(&self) -> StoreResult<Vec<SavedSchedule>>;
}

/// In-memory store with JSON snapshot persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    workers: Vec<Worker>,
    locations: Vec<Location>,
    cooldown_hours: Option<u32>,
    schedules: Vec<SavedSchedule>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the worker records.
    pub fn set_workers(&mut self, workers: Vec<Worker>) {
        self.workers = workers;
    }

    /// Replaces the location records.
    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations = locations;
    }

    /// Sets the cooldown setting.
    pub fn set_cooldown_hours(&mut self, hours: u32) {
        self.cooldown_hours = Some(hours);
    }

    /// Writes a snapshot of the whole store to a JSON file.
    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Loads a store snapshot from a JSON file.
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let file = File::open(path)?;
        let store = serde_json::from_reader(file)?;
        Ok(store)
    }
}

impl RosterStore for MemoryStore {
    fn list_workers(&self) -> StoreResult<Vec<Worker>> {
        Ok(self.workers.clone())
    }

    fn list_locations(&self) -> StoreResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn cooldown_hours(&self) -> StoreResult<u32> {
        Ok(self.cooldown_hours.unwrap_or(DEFAULT_COOLDOWN_HOURS))
    }

    fn save_schedule(
        &mut self,
        window: SchedulingWindow,
        workers: Vec<Worker>,
        locations: Vec<Location>,
        schedule: Schedule,
    ) -> StoreResult<String> {
        self.next_id += 1;
        let id = format!("sched-{}", self.next_id);
        debug!(%id, slots = schedule.slot_count(), "saving schedule");
        self.schedules.push(SavedSchedule {
            id: id.clone(),
            window,
            workers,
            locations,
            schedule,
        });
        Ok(id)
    }

    fn get_schedule(&self, id: &str) -> StoreResult<SavedSchedule> {
        self.schedules
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_schedules(&self) -> StoreResult<Vec<SavedSchedule>> {
        Ok(self.schedules.clone())
    }
}
