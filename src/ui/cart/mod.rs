//! Optimistic cart: committed quantities overlaid with one pending delta.

mod intent;
mod reducer;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::{apply, CartDelta, CartState, Quantities};
