use roster_core::{
    AddOutcome, Aggregates, InvalidInput, RecordingNotifier, RosterError, RosterSeed,
    RosterSession, RosterStore, SessionConfig,
};

fn demo_session() -> RosterSession<RecordingNotifier> {
    RosterSession::from_config(
        SessionConfig {
            seed: RosterSeed::Demo,
        },
        RecordingNotifier::new(),
    )
}

#[test]
fn rejected_keystroke_keeps_previous_draft() {
    let mut session = demo_session();

    assert!(session.on_name_input("Joh"));
    assert!(!session.on_name_input("Joh3"));
    assert_eq!(session.name_draft(), "Joh");

    assert!(session.on_phone_input("123-"));
    assert!(!session.on_phone_input("123-x"));
    assert_eq!(session.phone_draft(), "123-");
}

#[test]
fn add_click_uses_drafts_and_clears_them() {
    let mut session = demo_session();
    session.on_name_input("Alice");
    session.on_phone_input("333-444");

    assert!(session.on_add_click().is_added());
    assert_eq!(session.name_draft(), "");
    assert_eq!(session.phone_draft(), "");

    let last = session.store().people().last().expect("roster not empty");
    assert_eq!(last.name(), "Alice");
    assert_eq!(last.phone(), "333-444");
    assert_eq!(
        session.snapshot().aggregates,
        Aggregates {
            total: 4,
            present: 4,
            absent: 0
        }
    );
}

#[test]
fn declined_add_keeps_drafts() {
    let mut session = demo_session();
    session.on_name_input("Alice");

    assert_eq!(
        session.on_add_click(),
        AddOutcome::Declined(InvalidInput::EmptyPhone)
    );
    assert_eq!(session.name_draft(), "Alice");
    assert_eq!(session.store().len(), 3);
}

#[test]
fn negative_and_past_end_indices_are_out_of_range() {
    let mut session = demo_session();

    assert_eq!(
        session.on_toggle_click(-1),
        Err(RosterError::IndexOutOfRange { index: -1, len: 3 })
    );
    assert_eq!(
        session.on_toggle_click(3),
        Err(RosterError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert!(session.on_delete_click(-1).is_err());
    assert!(session.on_phone_tap(7).is_err());
    assert_eq!(session.store().aggregates().present, 3);
    assert!(session.notifier().messages().is_empty());
}

#[test]
fn delete_flow_through_events() {
    let mut session = demo_session();

    session.on_delete_click(1).expect("delete click in range");
    session.on_cancel_click();
    assert_eq!(session.store().len(), 3);
    assert!(session.on_confirm_click().is_none());

    session.on_delete_click(1).expect("delete click in range");
    let removed = session.on_confirm_click().expect("pending delete resolves");
    assert_eq!(removed.name(), "Jane Smith");
    assert_eq!(session.store().len(), 2);
}

#[test]
fn phone_tap_notifies_dialing_message() {
    let session = demo_session();

    let message = session.on_phone_tap(2).expect("phone tap in range");
    assert_eq!(message, "Dialing 555-123-4567...");
    assert_eq!(session.dial("42"), "Dialing 42...");
    assert_eq!(
        session.notifier().messages(),
        vec!["Dialing 555-123-4567...", "Dialing 42..."]
    );
}

#[test]
fn borrowed_notifier_is_accepted() {
    let notifier = RecordingNotifier::new();
    let mut session = RosterSession::new(RosterStore::demo(), &notifier);
    session.on_toggle_click(0).expect("toggle in range");
    session.on_phone_tap(0).expect("phone tap in range");
    drop(session);

    assert_eq!(notifier.take_messages(), vec!["Dialing 123-456-7890..."]);
}
