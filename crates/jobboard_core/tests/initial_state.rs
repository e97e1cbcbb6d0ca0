use jobboard_core::{AppState, ChatRole, ASSISTANT_GREETING};

#[test]
fn fresh_state_is_idle_on_first_page() {
    let mut state = AppState::new();
    let view = state.view();

    assert_eq!(view.page, 1);
    assert!(!view.can_go_prev);
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert!(view.jobs.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn fresh_state_opens_with_the_assistant_greeting() {
    let view = AppState::new().view();

    assert_eq!(view.chat.len(), 1);
    assert_eq!(view.chat[0].role, ChatRole::Assistant);
    assert_eq!(view.chat[0].text, ASSISTANT_GREETING);
    assert!(!view.assistant_pending);
}
