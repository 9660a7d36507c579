use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormState, SubmitOutcome, SubmitPhase};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { ch } => {
                if state.is_pending() {
                    return state;
                }
                let mut next = clear_done(state);
                match next.focused {
                    FormField::Title => next.title.push(ch),
                    FormField::Price => {
                        // Price accepts only number-shaped input.
                        if ch.is_ascii_digit() || ch == '.' {
                            next.price.push(ch);
                        }
                    }
                }
                next
            }
            FormIntent::Backspace => {
                if state.is_pending() {
                    return state;
                }
                let mut next = clear_done(state);
                match next.focused {
                    FormField::Title => {
                        next.title.pop();
                    }
                    FormField::Price => {
                        next.price.pop();
                    }
                }
                next
            }
            FormIntent::FocusNext | FormIntent::FocusPrev => {
                if state.is_pending() {
                    return state;
                }
                // Two fields, so next and prev coincide.
                let mut next = state;
                next.focused = match next.focused {
                    FormField::Title => FormField::Price,
                    FormField::Price => FormField::Title,
                };
                next
            }
            FormIntent::Submit => {
                if state.is_pending() {
                    return state;
                }
                if state.title.trim().is_empty() {
                    return FormState {
                        phase: SubmitPhase::Done(SubmitOutcome::Rejected {
                            error: "Title is required".to_string(),
                        }),
                        ..state
                    };
                }
                if state.parsed_price().is_none() {
                    return FormState {
                        phase: SubmitPhase::Done(SubmitOutcome::Rejected {
                            error: "Price must be a non-negative number".to_string(),
                        }),
                        ..state
                    };
                }
                FormState {
                    phase: SubmitPhase::Pending,
                    ..state
                }
            }
            FormIntent::Resolved { outcome } => {
                // Only a pending submission can resolve; a stray resolution
                // after a reset is dropped.
                if !state.is_pending() {
                    return state;
                }
                FormState {
                    phase: SubmitPhase::Done(outcome),
                    ..state
                }
            }
        }
    }
}

/// Editing after a resolved submission starts a fresh attempt.
fn clear_done(state: FormState) -> FormState {
    match state.phase {
        SubmitPhase::Done(_) => FormState {
            phase: SubmitPhase::Idle,
            ..state
        },
        _ => state,
    }
}
