//! In-memory roster store.
//!
//! # Responsibility
//! - Own the ordered roster and the delete confirmation gate.
//! - Provide add/toggle/delete entry points with atomic semantics.
//!
//! # Invariants
//! - Insertion order is display order; no operation reorders entries.
//! - Aggregates are derived from the roster on every read, so
//!   `total == present + absent == len` holds after every mutation.
//! - A failed operation leaves roster and gate untouched.
//! - Log events carry counts only, never names or phone numbers.

use crate::model::person::{Person, PersonId};
use crate::store::confirm_gate::{ConfirmationGate, PendingDeletion};
use log::{debug, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Hard failure for roster operations.
///
/// Signals a caller bug, not a recoverable user condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// Index is negative or not below the roster length.
    IndexOutOfRange { index: i64, len: usize },
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "roster index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for RosterError {}

/// Soft validation failure for `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyName,
    EmptyPhone,
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyPhone => write!(f, "phone must not be empty"),
        }
    }
}

/// Result of an add attempt.
///
/// A declined add is not an error: the store is unchanged and the caller may
/// surface a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PersonId),
    Declined(InvalidInput),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Derived roster counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

impl Aggregates {
    /// Recomputes counts from roster contents.
    pub fn from_people(people: &[Person]) -> Self {
        let total = people.len();
        let present = people.iter().filter(|person| person.is_present()).count();
        Self {
            total,
            present,
            absent: total - present,
        }
    }
}

/// Render-ready view of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSnapshot {
    pub people: Vec<Person>,
    pub aggregates: Aggregates,
    /// Index awaiting delete confirmation, if any.
    pub pending_index: Option<usize>,
}

/// Converts a signed UI index into a checked roster position.
pub fn checked_index(index: i64, len: usize) -> RosterResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < len)
        .ok_or(RosterError::IndexOutOfRange { index, len })
}

/// Roster plus confirmation gate, mutated only through its operations.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    people: Vec<Person>,
    gate: ConfirmationGate,
}

impl RosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `people` in iteration order.
    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            people: people.into_iter().collect(),
            gate: ConfirmationGate::Idle,
        }
    }

    /// Creates a store seeded with the demo roster, everyone present.
    pub fn demo() -> Self {
        Self::with_people([
            Person::new("John Doe", "123-456-7890"),
            Person::new("Jane Smith", "987-654-3210"),
            Person::new("Michael Johnson", "555-123-4567"),
        ])
    }

    /// Appends a present person when both fields are non-empty.
    ///
    /// # Contract
    /// - Empty `name` or `phone` declines silently; nothing changes.
    /// - Field format is not re-validated here.
    pub fn add(&mut self, name: impl Into<String>, phone: impl Into<String>) -> AddOutcome {
        let name = name.into();
        let phone = phone.into();
        if name.is_empty() {
            debug!("event=person_add module=roster status=declined reason=empty_name");
            return AddOutcome::Declined(InvalidInput::EmptyName);
        }
        if phone.is_empty() {
            debug!("event=person_add module=roster status=declined reason=empty_phone");
            return AddOutcome::Declined(InvalidInput::EmptyPhone);
        }

        let person = Person::new(name, phone);
        let id = person.id();
        self.people.push(person);
        self.log_mutation("person_added");
        AddOutcome::Added(id)
    }

    /// Flips presence of the person at `index`.
    pub fn toggle(&mut self, index: usize) -> RosterResult<()> {
        let len = self.people.len();
        let person = self
            .people
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange {
                index: index as i64,
                len,
            })?;
        person.toggle_presence();
        self.log_mutation("presence_toggled");
        Ok(())
    }

    /// Marks the person at `index` for deletion without removing it.
    ///
    /// A newer request replaces any older pending one.
    pub fn request_delete(&mut self, index: usize) -> RosterResult<()> {
        let person = self.people.get(index).ok_or(RosterError::IndexOutOfRange {
            index: index as i64,
            len: self.people.len(),
        })?;
        self.gate.request(index, person.id());
        debug!("event=delete_requested module=roster status=ok index={index}");
        Ok(())
    }

    /// Removes the pending person and returns it.
    ///
    /// No-op returning `None` when nothing is pending.
    pub fn confirm_delete(&mut self) -> Option<Person> {
        let pending = self.gate.take()?;
        let position = self.position_of(pending)?;
        let removed = self.people.remove(position);
        self.log_mutation("person_deleted");
        Some(removed)
    }

    /// Clears any pending deletion. Idempotent.
    pub fn cancel_delete(&mut self) {
        if !self.gate.is_idle() {
            debug!("event=delete_cancelled module=roster status=ok");
        }
        self.gate.clear();
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Counts recomputed from the current roster.
    pub fn aggregates(&self) -> Aggregates {
        Aggregates::from_people(&self.people)
    }

    pub fn pending_deletion(&self) -> Option<PendingDeletion> {
        self.gate.pending()
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            people: self.people.clone(),
            aggregates: self.aggregates(),
            pending_index: self.gate.pending().map(|pending| pending.index),
        }
    }

    fn position_of(&self, pending: PendingDeletion) -> Option<usize> {
        match self.people.get(pending.index) {
            Some(person) if person.id() == pending.person_id => Some(pending.index),
            _ => {
                let found = self
                    .people
                    .iter()
                    .position(|person| person.id() == pending.person_id);
                if found.is_none() {
                    warn!(
                        "event=delete_confirmed module=roster status=stale index={}",
                        pending.index
                    );
                }
                found
            }
        }
    }

    fn log_mutation(&self, event: &str) {
        let counts = self.aggregates();
        info!(
            "event={event} module=roster status=ok total={} present={} absent={}",
            counts.total, counts.present, counts.absent
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{checked_index, Aggregates, RosterError, RosterStore};
    use crate::model::person::Person;

    #[test]
    fn checked_index_rejects_negative_and_past_end() {
        assert_eq!(checked_index(0, 1), Ok(0));
        assert_eq!(
            checked_index(-1, 3),
            Err(RosterError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(
            checked_index(3, 3),
            Err(RosterError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn aggregates_of_empty_roster_are_zero() {
        assert_eq!(Aggregates::from_people(&[]), Aggregates::default());
    }

    #[test]
    fn demo_roster_is_fully_present() {
        let store = RosterStore::demo();
        let counts = store.aggregates();
        assert_eq!((counts.total, counts.present, counts.absent), (3, 3, 0));
        assert_eq!(store.get(0).map(Person::name), Some("John Doe"));
    }

    #[test]
    fn toggle_failure_leaves_state_untouched() {
        let mut store = RosterStore::demo();
        let before = store.snapshot();
        assert!(store.toggle(3).is_err());
        assert_eq!(store.snapshot(), before);
    }
}
