//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the roster UI event surface to Dart via FRB.
//! - Own the single process-wide roster session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every event runs to completion under the session lock, in call order.
//! - Messages are UTF-8 strings with stable meaning.

use log::{info, warn};
use roster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AddOutcome,
    LogNotifier, Person, RosterSeed, RosterSession, SessionConfig,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

const SEED_ENV_VAR: &str = "ROSTER_SEED";

static SESSION: OnceLock<Mutex<RosterSession<LogNotifier>>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One roster row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonView {
    /// Stable person ID in string form.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub present: bool,
}

/// Full render state of the roster page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    /// Rows in display order.
    pub people: Vec<PersonView>,
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    /// Row awaiting delete confirmation; drives the confirmation prompt.
    pub pending_index: Option<u32>,
    pub name_draft: String,
    pub phone_draft: String,
}

/// Generic response envelope for click events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    /// Whether the event changed or resolved anything.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl EventResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Returns current render state.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_view() -> RosterView {
    let session = lock_session();
    to_roster_view(&session)
}

/// Replaces the session with a fresh one (`demo` seeds three people).
#[flutter_rust_bridge::frb(sync)]
pub fn roster_reset(seed: String) -> RosterView {
    let mut session = lock_session();
    *session = new_session(RosterSeed::parse(seed.as_str()));
    info!(
        "event=session_reset module=ffi status=ok total={}",
        session.store().len()
    );
    to_roster_view(&session)
}

/// Proposes a full name draft; returns `false` when the keystroke is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn on_name_input(text: String) -> bool {
    lock_session().on_name_input(text.as_str())
}

/// Proposes a full phone draft; returns `false` when the keystroke is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn on_phone_input(text: String) -> bool {
    lock_session().on_phone_input(text.as_str())
}

/// Adds the current drafts as a new present person.
#[flutter_rust_bridge::frb(sync)]
pub fn on_add_click() -> EventResponse {
    match lock_session().on_add_click() {
        AddOutcome::Added(_) => EventResponse::success("Person added."),
        AddOutcome::Declined(reason) => EventResponse::failure(format!("Not added: {reason}.")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn on_toggle_click(index: i64) -> EventResponse {
    match lock_session().on_toggle_click(index) {
        Ok(()) => EventResponse::success("Presence updated."),
        Err(err) => EventResponse::failure(format!("on_toggle_click failed: {err}")),
    }
}

/// Requests deletion; the host shows a confirmation prompt on success.
#[flutter_rust_bridge::frb(sync)]
pub fn on_delete_click(index: i64) -> EventResponse {
    match lock_session().on_delete_click(index) {
        Ok(()) => EventResponse::success("Confirm deletion."),
        Err(err) => EventResponse::failure(format!("on_delete_click failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn on_confirm_click() -> EventResponse {
    match lock_session().on_confirm_click() {
        Some(_) => EventResponse::success("Person deleted."),
        None => EventResponse::failure("No deletion pending."),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn on_cancel_click() -> EventResponse {
    lock_session().on_cancel_click();
    EventResponse::success("Deletion cancelled.")
}

/// Returns the dialing message for the row's phone in `message`.
///
/// The host is responsible for any actual call or alert.
#[flutter_rust_bridge::frb(sync)]
pub fn on_phone_tap(index: i64) -> EventResponse {
    match lock_session().on_phone_tap(index) {
        Ok(message) => EventResponse::success(message),
        Err(err) => EventResponse::failure(format!("on_phone_tap failed: {err}")),
    }
}

fn lock_session() -> MutexGuard<'static, RosterSession<LogNotifier>> {
    SESSION
        .get_or_init(|| Mutex::new(new_session(resolve_seed())))
        .lock()
        .unwrap_or_else(|poisoned| {
            warn!("event=session_lock module=ffi status=recovered");
            poisoned.into_inner()
        })
}

fn new_session(seed: RosterSeed) -> RosterSession<LogNotifier> {
    RosterSession::from_config(SessionConfig { seed }, LogNotifier)
}

fn resolve_seed() -> RosterSeed {
    std::env::var(SEED_ENV_VAR)
        .map(|raw| RosterSeed::parse(raw.as_str()))
        .unwrap_or_default()
}

fn to_roster_view(session: &RosterSession<LogNotifier>) -> RosterView {
    let snapshot = session.snapshot();
    RosterView {
        people: snapshot.people.iter().map(to_person_view).collect(),
        total: clamp_u32(snapshot.aggregates.total),
        present: clamp_u32(snapshot.aggregates.present),
        absent: clamp_u32(snapshot.aggregates.absent),
        pending_index: snapshot.pending_index.map(clamp_u32),
        name_draft: session.name_draft().to_string(),
        phone_draft: session.phone_draft().to_string(),
    }
}

fn to_person_view(person: &Person) -> PersonView {
    PersonView {
        id: person.id().to_string(),
        name: person.name().to_string(),
        phone: person.phone().to_string(),
        present: person.is_present(),
    }
}

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, on_add_click, on_cancel_click, on_confirm_click,
        on_delete_click, on_name_input, on_phone_input, on_phone_tap, on_toggle_click,
        roster_reset, roster_view,
    };
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // The session is process-wide; tests touching it run one at a time.
    static SESSION_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn exclusive() -> MutexGuard<'static, ()> {
        SESSION_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn reset_demo_seeds_three_present_people() {
        let _guard = exclusive();
        let view = roster_reset("demo".to_string());
        assert_eq!(view.people.len(), 3);
        assert_eq!((view.total, view.present, view.absent), (3, 3, 0));
        assert_eq!(view.pending_index, None);

        let empty = roster_reset(String::new());
        assert!(empty.people.is_empty());
    }

    #[test]
    fn add_flow_applies_drafts() {
        let _guard = exclusive();
        roster_reset("demo".to_string());

        assert!(on_name_input("Alice".to_string()));
        assert!(!on_phone_input("333-4444x".to_string()));
        assert!(on_phone_input("333-444".to_string()));
        assert!(on_add_click().ok);

        let view = roster_view();
        assert_eq!(view.total, 4);
        assert_eq!(view.people[3].name, "Alice");
        assert!(view.name_draft.is_empty());

        let declined = on_add_click();
        assert!(!declined.ok);
        assert!(declined.message.contains("name must not be empty"));
    }

    #[test]
    fn toggle_and_delete_flow() {
        let _guard = exclusive();
        roster_reset("demo".to_string());

        assert!(on_toggle_click(0).ok);
        let failed = on_toggle_click(-1);
        assert!(!failed.ok);
        assert!(failed.message.contains("out of range"));

        assert!(on_delete_click(1).ok);
        assert_eq!(roster_view().pending_index, Some(1));
        assert!(on_cancel_click().ok);
        assert_eq!(roster_view().pending_index, None);
        assert!(!on_confirm_click().ok);

        assert!(on_delete_click(1).ok);
        assert!(on_confirm_click().ok);
        let view = roster_view();
        assert_eq!((view.total, view.present, view.absent), (2, 1, 1));
        assert_eq!(view.people[1].name, "Michael Johnson");
    }

    #[test]
    fn phone_tap_returns_dialing_message() {
        let _guard = exclusive();
        roster_reset("demo".to_string());

        let response = on_phone_tap(1);
        assert!(response.ok);
        assert_eq!(response.message, "Dialing 987-654-3210...");
        assert!(!on_phone_tap(3).ok);
    }
}
