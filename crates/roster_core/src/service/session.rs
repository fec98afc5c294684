//! UI session facade over one roster store.
//!
//! # Responsibility
//! - Accept or reject keystrokes for the name/phone drafts.
//! - Map click events onto store operations in arrival order.
//! - Route phone taps to the injected notifier.
//!
//! # Invariants
//! - Drafts only ever hold values accepted by the fragment validators.
//! - Drafts are cleared after a successful add and kept after a declined one.
//! - Signed UI indices are range-checked before reaching the store.

use crate::model::person::Person;
use crate::notify::{dialing_message, Notifier};
use crate::store::roster_store::{
    checked_index, AddOutcome, RosterResult, RosterSnapshot, RosterStore,
};
use crate::validate::{is_valid_name_fragment, is_valid_phone_fragment};
use log::debug;

/// Initial roster contents for a new session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterSeed {
    #[default]
    Empty,
    Demo,
}

impl RosterSeed {
    /// Parses `demo` (case-insensitive); anything else is `Empty`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("demo") {
            Self::Demo
        } else {
            Self::Empty
        }
    }
}

/// Session construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: RosterSeed,
}

/// Session-scoped roster with draft input state.
pub struct RosterSession<N: Notifier> {
    store: RosterStore,
    name_draft: String,
    phone_draft: String,
    notifier: N,
}

impl<N: Notifier> RosterSession<N> {
    /// Creates a session over an existing store.
    pub fn new(store: RosterStore, notifier: N) -> Self {
        Self {
            store,
            name_draft: String::new(),
            phone_draft: String::new(),
            notifier,
        }
    }

    /// Creates a session seeded per `config`.
    pub fn from_config(config: SessionConfig, notifier: N) -> Self {
        let store = match config.seed {
            RosterSeed::Empty => RosterStore::new(),
            RosterSeed::Demo => RosterStore::demo(),
        };
        Self::new(store, notifier)
    }

    /// Proposes a new full name draft; returns whether it was accepted.
    pub fn on_name_input(&mut self, text: &str) -> bool {
        let accepted = is_valid_name_fragment(text);
        if accepted {
            self.name_draft = text.to_string();
        } else {
            debug!("event=name_input module=session status=rejected");
        }
        accepted
    }

    /// Proposes a new full phone draft; returns whether it was accepted.
    pub fn on_phone_input(&mut self, text: &str) -> bool {
        let accepted = is_valid_phone_fragment(text);
        if accepted {
            self.phone_draft = text.to_string();
        } else {
            debug!("event=phone_input module=session status=rejected");
        }
        accepted
    }

    /// Adds the current drafts as a new person.
    pub fn on_add_click(&mut self) -> AddOutcome {
        let outcome = self
            .store
            .add(self.name_draft.as_str(), self.phone_draft.as_str());
        if outcome.is_added() {
            self.name_draft.clear();
            self.phone_draft.clear();
        }
        outcome
    }

    pub fn on_toggle_click(&mut self, index: i64) -> RosterResult<()> {
        let position = checked_index(index, self.store.len())?;
        self.store.toggle(position)
    }

    /// Opens the confirmation prompt for the person at `index`.
    pub fn on_delete_click(&mut self, index: i64) -> RosterResult<()> {
        let position = checked_index(index, self.store.len())?;
        self.store.request_delete(position)
    }

    pub fn on_confirm_click(&mut self) -> Option<Person> {
        self.store.confirm_delete()
    }

    pub fn on_cancel_click(&mut self) {
        self.store.cancel_delete();
    }

    /// Notifies a dial request for the phone of the person at `index`.
    ///
    /// Returns the message handed to the notifier.
    pub fn on_phone_tap(&self, index: i64) -> RosterResult<String> {
        let position = checked_index(index, self.store.len())?;
        let phone = self.store.people()[position].phone();
        Ok(self.dial(phone))
    }

    /// Notifies a dial request for an arbitrary phone string.
    pub fn dial(&self, phone: &str) -> String {
        let message = dialing_message(phone);
        self.notifier.notify(message.as_str());
        message
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn name_draft(&self) -> &str {
        &self.name_draft
    }

    pub fn phone_draft(&self) -> &str {
        &self.phone_draft
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.store.snapshot()
    }
}
