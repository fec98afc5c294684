//! Two-state gate guarding destructive roster deletion.

use crate::model::person::PersonId;
use serde::Serialize;

/// Delete request awaiting user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingDeletion {
    /// Roster position at request time.
    pub index: usize,
    /// Identity of the person at `index` when the request was made.
    pub person_id: PersonId,
}

/// Confirmation gate state.
///
/// Starts `Idle` and cycles for the whole session; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    PendingConfirmation(PendingDeletion),
}

impl ConfirmationGate {
    /// Enters (or re-targets) the pending state.
    pub fn request(&mut self, index: usize, person_id: PersonId) {
        *self = Self::PendingConfirmation(PendingDeletion { index, person_id });
    }

    /// Resolves the gate for confirmation, returning the pending target.
    ///
    /// Returns `None` and stays `Idle` when nothing is pending.
    pub fn take(&mut self) -> Option<PendingDeletion> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::PendingConfirmation(pending) => Some(pending),
        }
    }

    /// Cancels any pending request.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    pub fn pending(&self) -> Option<PendingDeletion> {
        match self {
            Self::Idle => None,
            Self::PendingConfirmation(pending) => Some(*pending),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfirmationGate, PendingDeletion};
    use uuid::Uuid;

    #[test]
    fn starts_idle() {
        let gate = ConfirmationGate::default();
        assert!(gate.is_idle());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn request_then_take_returns_target_and_goes_idle() {
        let id = Uuid::new_v4();
        let mut gate = ConfirmationGate::default();
        gate.request(2, id);
        assert_eq!(
            gate.take(),
            Some(PendingDeletion {
                index: 2,
                person_id: id
            })
        );
        assert!(gate.is_idle());
        assert_eq!(gate.take(), None);
    }

    #[test]
    fn second_request_replaces_first() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut gate = ConfirmationGate::default();
        gate.request(0, first);
        gate.request(1, second);
        assert_eq!(gate.pending().map(|p| p.person_id), Some(second));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut gate = ConfirmationGate::default();
        gate.request(0, Uuid::new_v4());
        gate.clear();
        gate.clear();
        assert!(gate.is_idle());
    }
}
