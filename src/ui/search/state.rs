use crate::api::Product;
use crate::ui::fetch::Fetch;
use crate::ui::mvi::UiState;

/// Search screen over a deliberately oversized dataset.
///
/// Each fetched product is replicated `multiplier` times so the filter
/// pass has real work to do. Keystrokes update `query` immediately and
/// mark the results `pending`; the filter itself runs on a deferred pass
/// so typing never waits on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// The expanded dataset, once fetched.
    pub source: Fetch<Vec<Product>>,
    pub query: String,
    /// Indices into the expanded dataset matching the last-applied query.
    pub results: Vec<usize>,
    /// A filter pass is scheduled but has not run yet.
    pub pending: bool,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn total(&self) -> usize {
        self.source.as_ready().map(Vec::len).unwrap_or(0)
    }

    /// Resolve result indices to products, up to `limit`.
    pub fn visible<'a>(&'a self, limit: usize) -> Vec<&'a Product> {
        let Some(source) = self.source.as_ready() else {
            return Vec::new();
        };
        self.results
            .iter()
            .take(limit)
            .filter_map(|&idx| source.get(idx))
            .collect()
    }
}

/// Replicates each product `multiplier` times.
pub fn expand_dataset(products: Vec<Product>, multiplier: u32) -> Vec<Product> {
    let mut expanded = Vec::with_capacity(products.len() * multiplier as usize);
    for product in products {
        for _ in 0..multiplier {
            expanded.push(product.clone());
        }
    }
    expanded
}

/// Case-insensitive match over title and category.
pub fn matches(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", product.title, product.category).to_lowercase();
    haystack.contains(needle)
}

pub fn filter_indices(source: &[Product], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    source
        .iter()
        .enumerate()
        .filter(|(_, product)| matches(product, &needle))
        .map(|(idx, _)| idx)
        .collect()
}
