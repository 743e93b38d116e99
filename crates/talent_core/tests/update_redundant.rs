use talent_core::{update, AppState, Msg, RecordId};

#[test]
fn redundant_messages_leave_state_clean() {
    engine_logging::initialize_for_tests();
    let mut state = AppState::new();

    // Nothing to dismiss, close or deselect.
    for msg in [
        Msg::NoticeDismissed,
        Msg::ArchiveCancelled,
        Msg::SelectionToggled {
            id: RecordId::from("1"),
            selected: false,
        },
    ] {
        let before = state.clone();
        let (next, effects) = update(state, msg);
        assert!(effects.is_empty());
        assert_eq!(before, next);
        state = next;
    }
    assert!(!state.consume_dirty());
}
