use crate::api::Product;
use crate::ui::fetch::Fetch;
use crate::ui::mvi::UiState;

/// Showcase screen: one product detail at a time, fetched on demand.
///
/// Advancing starts a fresh fetch and shows the skeleton. Superseded
/// fetches are not cancelled; whichever result arrives last is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    /// Id the user is currently on.
    pub product_id: u64,
    pub fetch: Fetch<Product>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            product_id: 1,
            fetch: Fetch::Idle,
        }
    }
}

impl UiState for GalleryState {}
