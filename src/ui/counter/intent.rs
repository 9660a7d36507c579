use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum CounterIntent {
    /// User asked for a delete: bump the shown count immediately.
    /// Ignored while a delete is already pending (single-flight).
    Begin,
    /// The remote delete succeeded: committed adopts the optimistic value.
    Confirmed,
    /// The remote delete failed: snap back to the committed count.
    Failed,
}

impl Intent for CounterIntent {}
