//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical roster entry rendered by every UI projection.
//! - Keep presence as the only mutable attribute of an entry.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `name` and `phone` are fixed at creation; there is no setter for them.
//! - `present` starts as `true`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one roster entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// One tracked person in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    phone: String,
    present: bool,
}

impl Person {
    /// Creates a present person with a generated stable ID.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone)
    }

    /// Creates a present person with a caller-provided stable ID.
    ///
    /// Used by hosts that already track identity for a row.
    pub fn with_id(id: PersonId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            present: true,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Flips presence and returns the new value.
    pub fn toggle_presence(&mut self) -> bool {
        self.present = !self.present;
        self.present
    }
}
