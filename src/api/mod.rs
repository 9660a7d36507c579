//! Client for the remote product store.
//!
//! One HTTP request per interaction; no retries, no caching, no
//! pagination. All failures fold into a single user-visible signal at the
//! UI boundary (see [`StoreError::user_message`]).

mod client;
mod error;
mod types;

pub use client::StoreClient;
pub use error::StoreError;
pub use types::{NewProduct, Product, Rating};
