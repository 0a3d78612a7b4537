// Integration tests for the session store and navigation

mod common;

use algoscope::catalog::{Catalog, Language};
use algoscope::session::{SessionError, SessionStore};
use common::{counter_algorithm, counter_catalog};
use proptest::prelude::*;
use serde_json::json;

fn session_with(n: u64) -> SessionStore {
    let algorithm = counter_algorithm();
    let mut session = SessionStore::new();
    session.select_algorithm(Some(&algorithm)).unwrap();
    session.set_input(json!({ "n": n })).unwrap();
    session
}

#[derive(Debug, Clone)]
enum Action {
    Advance,
    Retreat,
    Reset,
    TogglePlay,
    JumpTo(usize),
    JumpToEnd,
    StepBy(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Advance),
        Just(Action::Retreat),
        Just(Action::Reset),
        Just(Action::TogglePlay),
        (0usize..40).prop_map(Action::JumpTo),
        Just(Action::JumpToEnd),
        (0usize..10).prop_map(Action::StepBy),
    ]
}

proptest! {
    #[test]
    fn index_stays_in_bounds(n in 1u64..20, actions in prop::collection::vec(action(), 0..60)) {
        let mut session = session_with(n);
        prop_assert_eq!(session.index(), 0);
        prop_assert!(!session.is_playing());

        for action in actions {
            let mut nav = session.navigator();
            match action {
                Action::Advance => { nav.advance(); }
                Action::Retreat => { nav.retreat(); }
                Action::Reset => nav.reset(),
                Action::TogglePlay => { nav.toggle_play(); }
                Action::JumpTo(i) => nav.jump_to(i),
                Action::JumpToEnd => nav.jump_to_end(),
                Action::StepBy(k) => { nav.step_forward_by(k); }
            }
            prop_assert!(session.index() < session.len());
        }
    }

    #[test]
    fn advance_reaches_end_in_len_minus_one(n in 1u64..30) {
        let mut session = session_with(n);
        session.navigator().set_playing(true);
        let mut moves = 0;
        while session.navigator().advance() {
            moves += 1;
        }
        prop_assert_eq!(moves, session.len() - 1);
        prop_assert_eq!(session.index(), session.len() - 1);
        prop_assert!(!session.is_playing());
    }

    #[test]
    fn retreat_bottoms_out_at_zero(n in 1u64..30, start in 0usize..30) {
        let mut session = session_with(n);
        session.navigator().jump_to(start);
        while session.navigator().retreat() {}
        prop_assert_eq!(session.index(), 0);
        prop_assert!(!session.navigator().retreat());
        prop_assert_eq!(session.index(), 0);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = session_with(6);
    session.navigator().step_forward_by(3);
    session.navigator().set_playing(true);

    session.navigator().reset();
    let once = (session.index(), session.is_playing(), session.revision());
    session.navigator().reset();
    let twice = (session.index(), session.is_playing(), session.revision());
    assert_eq!(once, twice);
    assert_eq!(once.0, 0);
    assert!(!once.1);
}

#[test]
fn test_set_input_replaces_whole_sequence() {
    let mut session = session_with(7);
    session.navigator().step_forward_by(5);
    session.navigator().set_playing(true);
    let revision = session.revision();

    session.set_input(json!({"n": 2})).unwrap();
    assert_eq!(session.len(), 2);
    assert_eq!(session.index(), 0);
    assert!(!session.is_playing());
    assert!(session.revision() > revision);

    let messages: Vec<&str> = session
        .steps()
        .unwrap()
        .iter()
        .map(|s| s.message.as_str())
        .collect();
    assert_eq!(messages, vec!["tick 0", "tick 1"]);
}

#[test]
fn test_rejected_input_keeps_previous_sequence() {
    let mut session = session_with(4);
    session.navigator().step_forward_by(2);

    let err = session.set_input(json!({"n": "many"})).unwrap_err();
    assert!(matches!(err, SessionError::Algorithm(_)));
    assert_eq!(session.len(), 4);
    assert_eq!(session.index(), 2);
    assert_eq!(session.last_error(), Some(&err));

    let err = session.set_input_text("[1, 2").unwrap_err();
    assert!(matches!(err, SessionError::InputParse(_)));
    assert_eq!(session.len(), 4);

    session.set_input_text(r#"{"n": 3}"#).unwrap();
    assert_eq!(session.len(), 3);
    assert!(session.last_error().is_none());
}

#[test]
fn test_clearing_selection_empties_session() {
    let mut session = session_with(3);
    session.select_algorithm(None).unwrap();
    assert!(session.is_empty());
    assert!(session.is_at_end());
    assert!(session.current_step().is_none());
    assert!(!session.navigator().advance());
    assert_eq!(session.index(), 0);
}

#[test]
fn test_invalid_speed_rejected() {
    let mut session = SessionStore::new();
    assert_eq!(session.set_speed(0.0), Err(SessionError::InvalidSpeed(0.0)));
    assert!(session.set_speed(f64::NAN).is_err());
    assert!(session.set_speed(-2.0).is_err());
    assert_eq!(session.speed(), 1.0);
}

#[test]
fn test_language_does_not_change_steps() {
    let catalog = Catalog::builtin();
    let mut session = SessionStore::new();
    session.select_algorithm(catalog.find("two-sum")).unwrap();
    session.navigator().step_forward_by(2);
    let before = session.current_step().cloned();

    session.set_language(Language::Java);
    assert_eq!(session.current_step().cloned(), before);
    assert_eq!(session.index(), 2);
    assert_eq!(session.source().map(|s| s.language), Some(Language::Java));
}

#[test]
fn test_every_builtin_plays_to_completion() {
    let catalog = Catalog::builtin();
    for algorithm in catalog.algorithms() {
        let mut session = SessionStore::new();
        session.select_algorithm(Some(algorithm)).unwrap();
        let len = session.len();
        assert!(len >= 1, "{} produced no steps", algorithm.id);

        session.navigator().set_playing(true);
        let moved = session.navigator().step_forward_by(len + 3);
        assert_eq!(moved, len - 1, "{}", algorithm.id);
        assert!(session.is_at_end());
        assert!(!session.is_playing());
        assert!(session.code_line().is_some());
    }
}

#[test]
fn test_custom_catalog_lookup() {
    let catalog = counter_catalog();
    assert_eq!(catalog.len(), 1);
    let algorithm = catalog.find("counter").unwrap();
    let steps = algorithm.trace(&algorithm.default_input()).unwrap();
    assert_eq!(steps.len(), 5);
}

#[test]
fn test_overflowing_inputs_are_rejected_not_fatal() {
    let catalog = Catalog::builtin();
    let cases = [
        ("two-sum", json!({"nums": [1, 2], "target": i64::MIN})),
        ("container-with-most-water", json!({"height": [i64::MAX, 0, i64::MAX]})),
        ("counting-bits", json!({"n": i64::MAX})),
        ("course-schedule", json!({"num_courses": i64::MAX, "prerequisites": []})),
    ];
    for (id, input) in cases {
        let mut session = SessionStore::new();
        session.select_algorithm(catalog.find(id)).unwrap();
        let before = session.len();

        let err = session.set_input(input).unwrap_err();
        assert!(matches!(err, SessionError::Algorithm(_)), "{id}");
        assert_eq!(session.len(), before, "{id}");
        assert_eq!(session.algorithm().map(|a| a.id), Some(id));
    }
}
