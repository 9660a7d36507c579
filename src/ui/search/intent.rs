use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The catalog fetch for this screen started.
    LoadStarted,
    /// The catalog fetch resolved; the reducer expands the dataset.
    Loaded {
        products: Vec<Product>,
        multiplier: u32,
    },
    /// The catalog fetch failed (folded message).
    LoadFailed { error: String },
    /// A character was typed into the search box.
    QueryPush { ch: char },
    /// Backspace in the search box.
    QueryPop,
    /// The deferred filter pass is running now.
    FilterPass,
}

impl Intent for SearchIntent {}
