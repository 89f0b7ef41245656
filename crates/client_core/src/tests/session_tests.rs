use crate::session::SessionState;
use shared::protocol::AskResponse;

fn kb_response() -> AskResponse {
    AskResponse::KnowledgeBase {
        question: "q".to_string(),
        solution: "s".to_string(),
        score: None,
    }
}

#[test]
fn trigger_is_inert_for_whitespace_questions() {
    let mut session = SessionState::default();
    for question in ["", "   ", "\n\t "] {
        session.set_question(question);
        assert!(!session.snapshot().can_submit(), "question {question:?}");
    }
    session.set_question(" 2+2 ");
    assert!(session.snapshot().can_submit());
}

#[test]
fn trigger_and_feedback_are_disabled_while_loading() {
    let mut session = SessionState::default();
    session.set_question("2+2");
    session.begin_ask();

    let snapshot = session.snapshot();
    assert!(!snapshot.can_submit());
    assert!(!snapshot.can_send_feedback());
}

#[test]
fn begin_ask_clears_the_previous_outcome() {
    let mut session = SessionState::default();
    session.set_question("2+2");
    session.begin_ask();
    session.resolve_failure("boom".to_string());
    assert_eq!(session.error(), Some("boom"));

    session.begin_ask();
    let snapshot = session.snapshot();
    assert!(snapshot.loading);
    assert_eq!(snapshot.error, None);
    assert!(snapshot.response.is_none());
}

#[test]
fn resolutions_set_exactly_one_outcome() {
    let mut session = SessionState::default();

    session.begin_ask();
    session.resolve_success(kb_response());
    assert!(session.response().is_some());
    assert!(session.error().is_none());

    session.begin_ask();
    session.resolve_failure("rate limited".to_string());
    assert!(session.response().is_none());
    assert!(session.error().is_some());

    session.begin_ask();
    session.resolve_cancelled();
    assert!(session.response().is_none());
    assert!(session.error().is_none());
    assert!(!session.loading());
}

#[test]
fn feedback_requires_an_answer_on_screen() {
    let mut session = SessionState::default();
    assert!(!session.snapshot().can_send_feedback());

    session.begin_ask();
    session.resolve_success(kb_response());
    assert!(session.snapshot().can_send_feedback());
}
