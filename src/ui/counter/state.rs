use crate::ui::mvi::UiState;

/// Removal counter with value-replacement optimism.
///
/// The displayed count is the optimistic value while a delete is in
/// flight, and the committed count otherwise. Unlike the cart this is not
/// a delta overlay: the optimistic side simply replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    /// Count confirmed by successful deletes.
    pub committed: u64,
    /// Replacement value shown while the delete is pending.
    pub optimistic: Option<u64>,
}

impl UiState for CounterState {}

impl CounterState {
    /// What the screen shows right now.
    pub fn shown(&self) -> u64 {
        self.optimistic.unwrap_or(self.committed)
    }

    pub fn is_pending(&self) -> bool {
        self.optimistic.is_some()
    }
}
