use crate::ui::fetch::Fetch;
use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::{expand_dataset, filter_indices, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::LoadStarted => SearchState {
                source: Fetch::Loading,
                results: Vec::new(),
                pending: false,
                ..state
            },
            SearchIntent::Loaded {
                products,
                multiplier,
            } => {
                let expanded = expand_dataset(products, multiplier);
                let results = filter_indices(&expanded, &state.query);
                SearchState {
                    source: Fetch::Ready(expanded),
                    results,
                    pending: false,
                    ..state
                }
            }
            SearchIntent::LoadFailed { error } => SearchState {
                source: Fetch::Failed(error),
                results: Vec::new(),
                pending: false,
                ..state
            },
            SearchIntent::QueryPush { ch } => {
                let mut next = state;
                next.query.push(ch);
                next.pending = true;
                next
            }
            SearchIntent::QueryPop => {
                let mut next = state;
                next.query.pop();
                next.pending = true;
                next
            }
            SearchIntent::FilterPass => {
                let results = match state.source.as_ready() {
                    Some(source) => filter_indices(source, &state.query),
                    None => Vec::new(),
                };
                SearchState {
                    results,
                    pending: false,
                    ..state
                }
            }
        }
    }
}
