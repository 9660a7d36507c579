use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// First visit: start loading the current id if nothing has been
    /// fetched yet.
    Open,
    /// Move to the next product id and start loading it.
    Advance,
    /// Re-fetch the current id after a failure.
    Reload,
    /// A detail fetch resolved. Applied unconditionally: a late result
    /// from a superseded fetch still lands (last arrival wins).
    Loaded { product: Product },
    /// A detail fetch failed (folded message).
    Failed { error: String },
}

impl Intent for GalleryIntent {}
