use crate::ui::cart::state::CartDelta;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum CartIntent {
    /// Apply a speculative delta ahead of the remote commit. Replaces any
    /// delta already in flight.
    Speculate { delta: CartDelta },
    /// The remote commit for `delta` succeeded: fold it into committed
    /// state.
    CommitSucceeded { delta: CartDelta },
    /// The remote commit for `delta` failed: drop the matching pending
    /// delta so the view falls back to committed state.
    CommitFailed { delta: CartDelta },
}

impl Intent for CartIntent {}
