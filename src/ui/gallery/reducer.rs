use crate::ui::fetch::Fetch;
use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::GalleryState;
use crate::ui::mvi::Reducer;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::Open => {
                if !state.fetch.is_idle() {
                    return state;
                }
                GalleryState {
                    fetch: Fetch::Loading,
                    ..state
                }
            }
            GalleryIntent::Advance => GalleryState {
                product_id: state.product_id + 1,
                fetch: Fetch::Loading,
            },
            GalleryIntent::Reload => GalleryState {
                fetch: Fetch::Loading,
                ..state
            },
            GalleryIntent::Loaded { product } => GalleryState {
                fetch: Fetch::Ready(product),
                ..state
            },
            GalleryIntent::Failed { error } => GalleryState {
                fetch: Fetch::Failed(error),
                ..state
            },
        }
    }
}
