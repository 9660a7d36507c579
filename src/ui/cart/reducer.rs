use crate::ui::cart::intent::CartIntent;
use crate::ui::cart::state::{apply, CartState};
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Speculate { delta } => CartState {
                committed: state.committed,
                pending: Some(delta),
            },
            CartIntent::CommitSucceeded { delta } => {
                let committed = apply(&state.committed, delta);
                // Clear the pending delta only if it is still the one this
                // commit was for; a replacement delta stays in flight.
                let pending = if state.pending == Some(delta) {
                    None
                } else {
                    state.pending
                };
                CartState { committed, pending }
            }
            CartIntent::CommitFailed { delta } => {
                // Approximate rollback: the failed delta is dropped, not
                // inverted against committed state. If a newer delta
                // replaced it mid-flight, that one is kept and the view can
                // desynchronize from the server until it resolves.
                let pending = if state.pending == Some(delta) {
                    None
                } else {
                    state.pending
                };
                CartState {
                    committed: state.committed,
                    pending,
                }
            }
        }
    }
}
