//! Bridges user intents to remote operations.
//!
//! Every method spawns one fire-and-forget task on the shared runtime and
//! posts the outcome back to the event loop. Nothing here cancels an
//! in-flight request: a superseded call still resolves and its event is
//! still delivered (the loop decides what that means).

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::debug;

use crate::api::{NewProduct, StoreClient};
use crate::ui::cart::CartDelta;
use crate::ui::events::AppEvent;

/// Product the removal counter deletes, matching the demo it reproduces.
const REMOVAL_PRODUCT_ID: u64 = 1;

#[derive(Clone)]
pub struct Actions {
    client: Arc<StoreClient>,
    handle: Handle,
    events: Sender<AppEvent>,
}

impl Actions {
    pub fn new(client: Arc<StoreClient>, handle: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            handle,
            events,
        }
    }

    /// `GET /products` for the catalog screen.
    pub fn load_catalog(&self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.list_products().await;
            let _ = events.send(AppEvent::CatalogLoaded(result));
        });
    }

    /// `GET /products` for the search screen.
    pub fn load_search(&self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.list_products().await;
            let _ = events.send(AppEvent::SearchLoaded(result));
        });
    }

    /// Commit one speculative cart delta against the store.
    pub fn commit_cart(&self, delta: CartDelta) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(product_id = delta.product_id, "spawning cart commit");
        self.handle.spawn(async move {
            let result = client.confirm_cart_add(delta.product_id).await;
            let _ = events.send(AppEvent::CartCommitted { delta, result });
        });
    }

    /// `DELETE /products/1` for the removal counter.
    pub fn delete_product(&self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.delete_product(REMOVAL_PRODUCT_ID).await;
            let _ = events.send(AppEvent::RemovalFinished(result));
        });
    }

    /// `POST /products` with the form's payload.
    pub fn submit_product(&self, product: NewProduct) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.create_product(&product).await;
            let _ = events.send(AppEvent::FormSubmitted(result));
        });
    }

    /// `GET /products/{id}` for the showcase screen.
    pub fn load_showcase(&self, product_id: u64) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.get_product(product_id).await;
            let _ = events.send(AppEvent::ShowcaseLoaded(result));
        });
    }

    /// Queue a deferred filter pass behind whatever is already in the
    /// event channel, so typing is rendered before filtering runs.
    pub fn schedule_filter(&self) {
        let _ = self.events.send(AppEvent::FilterPass);
    }
}
