//! Model-View-Intent primitives for the screen state machines.
//!
//! Every stateful screen is a triple: an immutable state type, an intent
//! enum covering user actions and remote outcomes, and a pure reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (network calls, deferred passes) live outside the reducer:
//! the app layer observes state transitions and spawns the work, whose
//! completion comes back as another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
