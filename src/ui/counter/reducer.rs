use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Begin => {
                if state.is_pending() {
                    return state;
                }
                CounterState {
                    committed: state.committed,
                    optimistic: Some(state.committed + 1),
                }
            }
            CounterIntent::Confirmed => CounterState {
                committed: state.optimistic.unwrap_or(state.committed),
                optimistic: None,
            },
            CounterIntent::Failed => CounterState {
                committed: state.committed,
                optimistic: None,
            },
        }
    }
}
