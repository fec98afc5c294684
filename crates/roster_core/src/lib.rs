//! Core domain logic for the roster.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::person::{Person, PersonId};
pub use notify::{dialing_message, LogNotifier, Notifier, RecordingNotifier};
pub use service::session::{RosterSeed, RosterSession, SessionConfig};
pub use store::confirm_gate::{ConfirmationGate, PendingDeletion};
pub use store::roster_store::{
    checked_index, AddOutcome, Aggregates, InvalidInput, RosterError, RosterResult,
    RosterSnapshot, RosterStore,
};
pub use validate::{is_valid_name_fragment, is_valid_phone_fragment};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
