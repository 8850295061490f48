//! Worker (personnel) model.
//!
//! Workers are the people assigned to staffing locations. Each worker has
//! a role that determines which quota slots they can fill, and an optional
//! external identifier used by lookup surfaces (badge or service number).
//!
//! # Reference
//! Ernst et al. (2004), "Staff Scheduling and Rostering: A Review of
//! Applications, Methods and Models"

use serde::{Deserialize, Serialize};

/// Role of a worker.
///
/// A closed two-value set: every location quota is expressed in terms of
/// managers and regulars, so the role determines which pool a worker
/// competes in. Modeled as an enum so quota checks are exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Supervising staff (counts against `managers_needed`).
    Manager,
    /// Regular staff (counts against `regulars_needed`).
    Regular,
}

/// A worker available for assignment.
///
/// Immutable for the duration of one rostering run; owned by the record
/// store and referenced by id inside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Role (manager or regular).
    pub role: Role,
    /// External identifier (unique across all workers when present).
    pub external_id: Option<String>,
}

impl Worker {
    /// Creates a new worker with the given id and role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            external_id: None,
        }
    }

    /// Creates a manager.
    pub fn manager(id: impl Into<String>) -> Self {
        Self::new(id, Role::Manager)
    }

    /// Creates a regular worker.
    pub fn regular(id: impl Into<String>) -> Self {
        Self::new(id, Role::Regular)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the external identifier.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Whether this worker holds the given role.
    #[inline]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::manager("W1")
            .with_name("Dana")
            .with_external_id("123456");

        assert_eq!(w.id, "W1");
        assert_eq!(w.name, "Dana");
        assert_eq!(w.role, Role::Manager);
        assert_eq!(w.external_id.as_deref(), Some("123456"));
    }

    #[test]
    fn test_role_helpers() {
        assert!(Worker::manager("M").has_role(Role::Manager));
        assert!(Worker::regular("R").has_role(Role::Regular));
        assert!(!Worker::regular("R").has_role(Role::Manager));
    }

    #[test]
    fn test_role_serde_names() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"Manager\"");
        let back: Role = serde_json::from_str("\"Regular\"").unwrap();
        assert_eq!(back, Role::Regular);
    }
}
