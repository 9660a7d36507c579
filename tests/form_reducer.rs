//! Single-flight form submission state machine.

use vitrine::ui::form::{
    FormField, FormIntent, FormReducer, FormState, SubmitOutcome, SubmitPhase,
};
use vitrine::ui::mvi::Reducer;

fn typed(title: &str, price: &str) -> FormState {
    let mut state = FormState::default();
    for ch in title.chars() {
        state = FormReducer::reduce(state, FormIntent::Edit { ch });
    }
    state = FormReducer::reduce(state, FormIntent::FocusNext);
    for ch in price.chars() {
        state = FormReducer::reduce(state, FormIntent::Edit { ch });
    }
    state
}

// -- editing ------------------------------------------------------------

#[test]
fn edits_land_in_the_focused_field() {
    let state = typed("Lamp", "19.5");
    assert_eq!(state.title, "Lamp");
    assert_eq!(state.price, "19.5");
}

#[test]
fn price_field_rejects_non_numeric_input() {
    let mut state = FormReducer::reduce(FormState::default(), FormIntent::FocusNext);
    for ch in "1a2b.c5".chars() {
        state = FormReducer::reduce(state, FormIntent::Edit { ch });
    }
    assert_eq!(state.price, "12.5");
}

#[test]
fn focus_wraps_between_the_two_fields() {
    let state = FormReducer::reduce(FormState::default(), FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Price);
    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Title);
    let state = FormReducer::reduce(state, FormIntent::FocusPrev);
    assert_eq!(state.focused, FormField::Price);
}

#[test]
fn backspace_removes_from_the_focused_field() {
    let state = typed("Lamp", "19");
    let state = FormReducer::reduce(state, FormIntent::Backspace);
    assert_eq!(state.price, "1");
    assert_eq!(state.title, "Lamp");
}

// -- submission ---------------------------------------------------------

#[test]
fn valid_submit_goes_pending() {
    let state = FormReducer::reduce(typed("Lamp", "19.5"), FormIntent::Submit);
    assert!(matches!(state.phase, SubmitPhase::Pending));
}

#[test]
fn empty_title_rejects_without_going_pending() {
    let state = FormReducer::reduce(typed("", "5"), FormIntent::Submit);
    match state.phase {
        SubmitPhase::Done(SubmitOutcome::Rejected { error }) => {
            assert!(error.contains("Title"));
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[test]
fn unparseable_price_rejects_without_going_pending() {
    let state = FormReducer::reduce(typed("Lamp", ""), FormIntent::Submit);
    assert!(matches!(
        state.phase,
        SubmitPhase::Done(SubmitOutcome::Rejected { .. })
    ));
}

#[test]
fn submit_while_pending_is_a_noop() {
    let pending = FormReducer::reduce(typed("Lamp", "5"), FormIntent::Submit);
    let again = FormReducer::reduce(pending.clone(), FormIntent::Submit);
    assert_eq!(pending, again);
}

#[test]
fn edits_while_pending_are_ignored() {
    let pending = FormReducer::reduce(typed("Lamp", "5"), FormIntent::Submit);
    let state = FormReducer::reduce(pending, FormIntent::Edit { ch: 'x' });
    assert_eq!(state.price, "5");
}

#[test]
fn resolution_carries_exactly_one_text() {
    let pending = FormReducer::reduce(typed("Lamp", "5"), FormIntent::Submit);
    let state = FormReducer::reduce(
        pending,
        FormIntent::Resolved {
            outcome: SubmitOutcome::Accepted {
                message: "Product \"Lamp\" created as #21".to_string(),
            },
        },
    );
    match state.phase {
        SubmitPhase::Done(SubmitOutcome::Accepted { message }) => {
            assert!(message.contains("Lamp"));
        }
        other => panic!("expected Accepted, got {:?}", other),
    }
}

#[test]
fn resolution_without_a_pending_submit_is_dropped() {
    let state = FormReducer::reduce(
        typed("Lamp", "5"),
        FormIntent::Resolved {
            outcome: SubmitOutcome::Accepted {
                message: "stale".to_string(),
            },
        },
    );
    assert!(matches!(state.phase, SubmitPhase::Idle));
}

#[test]
fn typing_after_a_resolution_starts_a_fresh_attempt() {
    let pending = FormReducer::reduce(typed("Lamp", "5"), FormIntent::Submit);
    let done = FormReducer::reduce(
        pending,
        FormIntent::Resolved {
            outcome: SubmitOutcome::Rejected {
                error: "Remote operation failed. Try again.".to_string(),
            },
        },
    );
    let state = FormReducer::reduce(done, FormIntent::Edit { ch: 's' });
    assert!(matches!(state.phase, SubmitPhase::Idle));
    assert_eq!(state.title, "Lamps");
}
