//! Request validation for rostering runs.
//!
//! The engine itself never validates: malformed input is a caller-contract
//! violation with unspecified behavior. This module is the
//! request-construction layer's checklist, run before
//! [`crate::engine::RosterEngine::assign`]. Detects:
//! - Inverted or empty windows, and horizons the atomic unit doesn't divide
//! - Location durations below the floor or not multiples of the unit
//! - Duplicate worker, location, and external identifiers
//! - Pins referencing unknown slots, locations, or workers
//! - Pins exceeding a location's role quotas
//! - The same worker pinned to two locations over overlapping spans
//!
//! All problems are reported at once rather than failing on the first.

use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};

use crate::engine::slots::{atomic_unit_hours, generate_slots};
use crate::engine::RosterRequest;
use crate::models::{Location, Role, MIN_SLOT_HOURS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Window end not after start, or horizon not a multiple of the unit.
    InvalidWindow,
    /// Location duration below the floor or not a multiple of the unit.
    InvalidSlotDuration,
    /// Two entities share the same identifier.
    DuplicateId,
    /// A pin's timestamp matches no generated atomic slot start.
    MisalignedPin,
    /// A pin references a location that doesn't exist.
    UnknownLocation,
    /// A pin references a worker that doesn't exist.
    UnknownWorker,
    /// A pin assigns more workers of a role than the location's quota.
    QuotaExceeded,
    /// A worker is pinned to two locations over overlapping spans.
    DoubleBooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a request before it reaches the engine.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_request(request: &RosterRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let unit = atomic_unit_hours(&request.locations);

    // Window sanity
    if request.window.end <= request.window.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            "window end must be after window start",
        ));
    } else {
        let horizon = request.window.end - request.window.start;
        if horizon != Duration::hours(horizon.num_hours())
            || horizon.num_hours() % i64::from(unit) != 0
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("horizon must be a whole multiple of the {unit}h atomic unit"),
            ));
        }
    }

    // Location durations
    for loc in &request.locations {
        if loc.slot_duration_hours < MIN_SLOT_HOURS {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotDuration,
                format!(
                    "location '{}' duration {}h is below the {MIN_SLOT_HOURS}h minimum",
                    loc.id, loc.slot_duration_hours
                ),
            ));
        } else if loc.slot_duration_hours % unit != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotDuration,
                format!(
                    "location '{}' duration {}h is not a multiple of the {unit}h atomic unit",
                    loc.id, loc.slot_duration_hours
                ),
            ));
        }
    }

    // Identifier uniqueness
    let mut worker_ids = HashSet::new();
    let mut external_ids = HashSet::new();
    for w in &request.workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate worker id: {}", w.id),
            ));
        }
        if let Some(ext) = &w.external_id {
            if !external_ids.insert(ext.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("duplicate external id: {ext}"),
                ));
            }
        }
    }
    let mut location_ids = HashSet::new();
    for loc in &request.locations {
        if !location_ids.insert(loc.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate location id: {}", loc.id),
            ));
        }
    }

    validate_pins(request, unit, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_pins(request: &RosterRequest, unit: u32, errors: &mut Vec<ValidationError>) {
    let slot_starts: HashSet<DateTime<Utc>> = generate_slots(&request.window, unit)
        .iter()
        .map(|s| s.start)
        .collect();
    let workers_by_id: HashMap<&str, Role> = request
        .workers
        .iter()
        .map(|w| (w.id.as_str(), w.role))
        .collect();
    let locations_by_id: HashMap<&str, &Location> = request
        .locations
        .iter()
        .map(|l| (l.id.as_str(), l))
        .collect();

    // worker id → pinned (location, span) intervals for overlap detection
    let mut pinned_spans: HashMap<&str, Vec<(&str, DateTime<Utc>, DateTime<Utc>)>> =
        HashMap::new();

    for (pin_start, by_location) in &request.manual_pins {
        if !slot_starts.contains(pin_start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MisalignedPin,
                format!("pin at {pin_start} does not match any atomic slot start"),
            ));
            continue;
        }

        for (location_id, pinned) in by_location {
            let Some(location) = locations_by_id.get(location_id.as_str()) else {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLocation,
                    format!("pin references unknown location '{location_id}'"),
                ));
                continue;
            };

            let mut managers = 0u32;
            let mut regulars = 0u32;
            for worker_id in pinned {
                match workers_by_id.get(worker_id.as_str()) {
                    Some(Role::Manager) => managers += 1,
                    Some(Role::Regular) => regulars += 1,
                    None => errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownWorker,
                        format!("pin references unknown worker '{worker_id}'"),
                    )),
                }
            }
            if managers > location.managers_needed || regulars > location.regulars_needed {
                errors.push(ValidationError::new(
                    ValidationErrorKind::QuotaExceeded,
                    format!(
                        "pin at {pin_start} assigns {managers} managers / {regulars} regulars \
                         to '{location_id}' (quota {}/{})",
                        location.managers_needed, location.regulars_needed
                    ),
                ));
            }

            let span_hours = location.slots_to_fill(unit) as i64 * i64::from(unit);
            let span_end = *pin_start + Duration::hours(span_hours);
            for worker_id in pinned {
                pinned_spans.entry(worker_id.as_str()).or_default().push((
                    location_id.as_str(),
                    *pin_start,
                    span_end,
                ));
            }
        }
    }

    for (worker_id, spans) in &pinned_spans {
        for (i, (loc_a, start_a, end_a)) in spans.iter().enumerate() {
            for (loc_b, start_b, end_b) in &spans[i + 1..] {
                if loc_a != loc_b && start_a < end_b && start_b < end_a {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DoubleBooked,
                        format!(
                            "worker '{worker_id}' pinned to both '{loc_a}' and '{loc_b}' \
                             over overlapping slots"
                        ),
                    ));
                }
            }
        }
    }
}
