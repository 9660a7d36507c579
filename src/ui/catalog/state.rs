use crate::api::Product;
use crate::ui::fetch::Fetch;
use crate::ui::mvi::UiState;

/// Catalog screen: the fetched product list plus a selection cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub products: Fetch<Vec<Product>>,
    pub selected: usize,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn selected_product(&self) -> Option<&Product> {
        self.products.as_ready()?.get(self.selected)
    }
}
