use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::fetch::Fetch;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::LoadStarted => CatalogState {
                products: Fetch::Loading,
                selected: 0,
            },
            CatalogIntent::Loaded { products } => CatalogState {
                products: Fetch::Ready(products),
                selected: 0,
            },
            CatalogIntent::LoadFailed { error } => CatalogState {
                products: Fetch::Failed(error),
                selected: 0,
            },
            CatalogIntent::MoveUp => move_selection(state, -1),
            CatalogIntent::MoveDown => move_selection(state, 1),
        }
    }
}

fn move_selection(state: CatalogState, direction: i32) -> CatalogState {
    let len = state.products.as_ready().map(Vec::len).unwrap_or(0);
    if len == 0 {
        return CatalogState {
            selected: 0,
            ..state
        };
    }

    let current = state.selected.min(len - 1);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };

    CatalogState {
        selected: next,
        ..state
    }
}
