use std::collections::BTreeMap;

use crate::ui::mvi::UiState;

/// Authoritative mapping from product id to quantity.
pub type Quantities = BTreeMap<u64, i64>;

/// A not-yet-confirmed change to one product's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartDelta {
    pub product_id: u64,
    pub quantity: i64,
}

impl CartDelta {
    pub fn add(product_id: u64) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }

    pub fn inverse(self) -> Self {
        Self {
            product_id: self.product_id,
            quantity: -self.quantity,
        }
    }
}

/// Applies a delta to a quantity mapping, returning a new mapping.
///
/// The input is never mutated, so the previous snapshot stays valid for
/// rollback. Quantities are not clamped at zero; a negative delta on a
/// small quantity drives the entry negative, matching the observed
/// behavior of the system this reproduces.
pub fn apply(quantities: &Quantities, delta: CartDelta) -> Quantities {
    let mut next = quantities.clone();
    *next.entry(delta.product_id).or_insert(0) += delta.quantity;
    next
}

/// Cart state: committed quantities plus at most one pending delta.
///
/// The speculative view shown to the user is always recomputable as
/// committed + pending; it has no lifecycle of its own and disappears once
/// the delta resolves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    /// Quantities confirmed by a successful remote operation.
    pub committed: Quantities,
    /// The one in-flight delta, if any. A newer delta replaces it rather
    /// than queueing behind it (last write wins).
    pub pending: Option<CartDelta>,
}

impl UiState for CartState {}

impl CartState {
    pub fn with_committed(committed: Quantities) -> Self {
        Self {
            committed,
            pending: None,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Full speculative mapping: committed overlaid with the pending delta.
    pub fn view(&self) -> Quantities {
        match self.pending {
            Some(delta) => apply(&self.committed, delta),
            None => self.committed.clone(),
        }
    }

    /// Speculative quantity for one product, without building the full map.
    pub fn quantity(&self, product_id: u64) -> i64 {
        let base = self.committed.get(&product_id).copied().unwrap_or(0);
        match self.pending {
            Some(delta) if delta.product_id == product_id => base + delta.quantity,
            _ => base,
        }
    }
}
