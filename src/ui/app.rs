use tracing::{debug, warn};

use crate::api::{NewProduct, Product, StoreError};
use crate::config::ConfigStore;
use crate::ui::actions::Actions;
use crate::ui::cart::{CartDelta, CartIntent, CartReducer, CartState};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::form::{FormIntent, FormReducer, FormState, SubmitOutcome};
use crate::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};

/// The demo's screens, in navigation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Home,
    Catalog,
    NewProduct,
    Removals,
    Search,
    Showcase,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Catalog,
        Screen::NewProduct,
        Screen::Removals,
        Screen::Search,
        Screen::Showcase,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Catalog => "Catalog",
            Screen::NewProduct => "New Product",
            Screen::Removals => "Removals",
            Screen::Search => "Search",
            Screen::Showcase => "Showcase",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Catalog listing state (MVI pattern).
    catalog: CatalogState,
    /// Optimistic cart state (MVI pattern).
    cart: CartState,
    /// New-product form state (MVI pattern).
    form: FormState,
    /// Removal counter state (MVI pattern).
    counter: CounterState,
    /// Deferred search state (MVI pattern).
    search: SearchState,
    /// Showcase detail state (MVI pattern).
    gallery: GalleryState,
    /// Remote-operation spawner (resource, managed outside MVI).
    actions: Option<Actions>,
    config: ConfigStore,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            catalog: CatalogState::default(),
            cart: CartState::default(),
            form: FormState::default(),
            counter: CounterState::default(),
            search: SearchState::default(),
            gallery: GalleryState::default(),
            actions: None,
            config,
        }
    }

    /// Attach the remote-operation spawner. Without it every screen still
    /// renders; loads just never start.
    pub fn attach_actions(&mut self, actions: Actions) {
        self.actions = Some(actions);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch screens. First entry to a data-backed screen kicks off its
    /// fetch; switching away never cancels one.
    pub fn goto(&mut self, screen: Screen) {
        self.screen = screen;
        match screen {
            Screen::Catalog => {
                if self.catalog.products.is_idle() {
                    self.dispatch_catalog(CatalogIntent::LoadStarted);
                    if let Some(actions) = &self.actions {
                        actions.load_catalog();
                    }
                }
            }
            Screen::Search => {
                if self.search.source.is_idle() {
                    self.dispatch_search(SearchIntent::LoadStarted);
                    if let Some(actions) = &self.actions {
                        actions.load_search();
                    }
                }
            }
            Screen::Showcase => {
                if self.gallery.fetch.is_idle() {
                    self.dispatch_gallery(GalleryIntent::Open);
                    let product_id = self.gallery.product_id;
                    if let Some(actions) = &self.actions {
                        actions.load_showcase(product_id);
                    }
                }
            }
            Screen::Home | Screen::NewProduct | Screen::Removals => {}
        }
    }

    pub fn next_screen(&mut self) {
        let next = Screen::ALL[(self.screen.index() + 1) % Screen::ALL.len()];
        self.goto(next);
    }

    pub fn prev_screen(&mut self) {
        let len = Screen::ALL.len();
        let prev = Screen::ALL[(self.screen.index() + len - 1) % len];
        self.goto(prev);
    }

    // ========================================================================
    // Catalog + optimistic cart
    // ========================================================================

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn catalog_move_up(&mut self) {
        self.dispatch_catalog(CatalogIntent::MoveUp);
    }

    pub fn catalog_move_down(&mut self) {
        self.dispatch_catalog(CatalogIntent::MoveDown);
    }

    /// Add one unit of the selected product to the cart: the speculative
    /// quantity shows immediately, the commit runs in the background.
    pub fn add_selected_to_cart(&mut self) {
        let Some(product_id) = self.catalog.selected_product().map(|p| p.id) else {
            return;
        };
        let delta = CartDelta::add(product_id);
        self.dispatch_cart(CartIntent::Speculate { delta });
        if let Some(actions) = &self.actions {
            actions.commit_cart(delta);
        }
    }

    pub fn retry_catalog(&mut self) {
        if self.catalog.products.error().is_none() {
            return;
        }
        self.dispatch_catalog(CatalogIntent::LoadStarted);
        if let Some(actions) = &self.actions {
            actions.load_catalog();
        }
    }

    pub fn on_catalog_loaded(&mut self, result: Result<Vec<Product>, StoreError>) {
        match result {
            Ok(products) => {
                debug!(count = products.len(), "catalog loaded");
                self.dispatch_catalog(CatalogIntent::Loaded { products });
            }
            Err(err) => {
                warn!(%err, "catalog load failed");
                self.dispatch_catalog(CatalogIntent::LoadFailed {
                    error: err.user_message().to_string(),
                });
            }
        }
    }

    pub fn on_cart_committed(&mut self, delta: CartDelta, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.dispatch_cart(CartIntent::CommitSucceeded { delta }),
            Err(err) => {
                warn!(%err, product_id = delta.product_id, "cart commit failed, rolling back");
                self.dispatch_cart(CartIntent::CommitFailed { delta });
            }
        }
    }

    // ========================================================================
    // New-product form
    // ========================================================================

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_edit(&mut self, ch: char) {
        self.dispatch_form(FormIntent::Edit { ch });
    }

    pub fn form_backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn form_focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn form_focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    /// Ask to submit the form. If the reducer accepts (fields valid, no
    /// submission outstanding) the POST is spawned.
    pub fn submit_form(&mut self) {
        let was_pending = self.form.is_pending();
        self.dispatch_form(FormIntent::Submit);
        if was_pending || !self.form.is_pending() {
            return;
        }
        let Some(price) = self.form.parsed_price() else {
            return;
        };
        let product = NewProduct {
            title: self.form.title.trim().to_string(),
            price,
        };
        if let Some(actions) = &self.actions {
            actions.submit_product(product);
        }
    }

    pub fn on_form_submitted(&mut self, result: Result<Product, StoreError>) {
        let outcome = match result {
            Ok(product) => SubmitOutcome::Accepted {
                message: format!("Product \"{}\" created as #{}", product.title, product.id),
            },
            Err(err) => {
                warn!(%err, "product submission failed");
                SubmitOutcome::Rejected {
                    error: err.user_message().to_string(),
                }
            }
        };
        self.dispatch_form(FormIntent::Resolved { outcome });
    }

    // ========================================================================
    // Removal counter
    // ========================================================================

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    /// Bump the shown count and spawn the delete. Single-flight: ignored
    /// while a delete is already pending.
    pub fn begin_removal(&mut self) {
        if self.counter.is_pending() {
            return;
        }
        self.dispatch_counter(CounterIntent::Begin);
        if let Some(actions) = &self.actions {
            actions.delete_product();
        }
    }

    pub fn on_removal_finished(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.dispatch_counter(CounterIntent::Confirmed),
            Err(err) => {
                warn!(%err, "removal failed, reverting count");
                self.dispatch_counter(CounterIntent::Failed);
            }
        }
    }

    // ========================================================================
    // Deferred search
    // ========================================================================

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_push(&mut self, ch: char) {
        let was_pending = self.search.pending;
        self.dispatch_search(SearchIntent::QueryPush { ch });
        if !was_pending {
            if let Some(actions) = &self.actions {
                actions.schedule_filter();
            }
        }
    }

    pub fn search_pop(&mut self) {
        let was_pending = self.search.pending;
        self.dispatch_search(SearchIntent::QueryPop);
        if !was_pending {
            if let Some(actions) = &self.actions {
                actions.schedule_filter();
            }
        }
    }

    pub fn on_filter_pass(&mut self) {
        self.dispatch_search(SearchIntent::FilterPass);
    }

    pub fn retry_search(&mut self) {
        if self.search.source.error().is_none() {
            return;
        }
        self.dispatch_search(SearchIntent::LoadStarted);
        if let Some(actions) = &self.actions {
            actions.load_search();
        }
    }

    pub fn on_search_loaded(&mut self, result: Result<Vec<Product>, StoreError>) {
        match result {
            Ok(products) => {
                let multiplier = self.config.get().ui.search_multiplier;
                self.dispatch_search(SearchIntent::Loaded {
                    products,
                    multiplier,
                });
            }
            Err(err) => {
                warn!(%err, "search dataset load failed");
                self.dispatch_search(SearchIntent::LoadFailed {
                    error: err.user_message().to_string(),
                });
            }
        }
    }

    // ========================================================================
    // Showcase
    // ========================================================================

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    /// Advance to the next product and start its fetch. The previous fetch,
    /// if still running, is not cancelled; its late result may still land.
    pub fn advance_showcase(&mut self) {
        self.dispatch_gallery(GalleryIntent::Advance);
        let product_id = self.gallery.product_id;
        if let Some(actions) = &self.actions {
            actions.load_showcase(product_id);
        }
    }

    pub fn reload_showcase(&mut self) {
        if self.gallery.fetch.error().is_none() {
            return;
        }
        self.dispatch_gallery(GalleryIntent::Reload);
        let product_id = self.gallery.product_id;
        if let Some(actions) = &self.actions {
            actions.load_showcase(product_id);
        }
    }

    pub fn on_showcase_loaded(&mut self, result: Result<Product, StoreError>) {
        match result {
            Ok(product) => self.dispatch_gallery(GalleryIntent::Loaded { product }),
            Err(err) => {
                warn!(%err, "showcase load failed");
                self.dispatch_gallery(GalleryIntent::Failed {
                    error: err.user_message().to_string(),
                });
            }
        }
    }

    // ========================================================================
    // MVI dispatch helpers
    // ========================================================================

    fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    fn dispatch_cart(&mut self, intent: CartIntent) {
        dispatch_mvi!(self, cart, CartReducer, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    fn dispatch_gallery(&mut self, intent: GalleryIntent) {
        dispatch_mvi!(self, gallery, GalleryReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Rating;
    use crate::config::Config;
    use crate::ui::form::SubmitPhase;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config)
    }

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 9.99,
            description: String::new(),
            category: "demo".to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn remote_failure() -> StoreError {
        StoreError::Status { status: 500 }
    }

    // -- optimistic cart flow ---------------------------------------------

    #[test]
    fn add_to_cart_shows_speculative_quantity_immediately() {
        let mut app = make_app();
        app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
        app.add_selected_to_cart();
        assert_eq!(app.cart().quantity(1), 1);
        assert!(app.cart().committed.is_empty());
    }

    #[test]
    fn successful_commit_folds_delta_into_committed() {
        let mut app = make_app();
        app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
        app.add_selected_to_cart();
        let delta = app.cart().pending.expect("delta in flight");
        app.on_cart_committed(delta, Ok(()));
        assert_eq!(app.cart().committed.get(&1), Some(&1));
        assert!(app.cart().pending.is_none());
    }

    #[test]
    fn failed_commit_reverts_to_committed_view() {
        let mut app = make_app();
        app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
        app.add_selected_to_cart();
        let delta = app.cart().pending.expect("delta in flight");
        app.on_cart_committed(delta, Err(remote_failure()));
        assert_eq!(app.cart().quantity(1), 0);
        assert!(app.cart().committed.is_empty());
    }

    #[test]
    fn add_without_catalog_is_a_noop() {
        let mut app = make_app();
        app.add_selected_to_cart();
        assert!(app.cart().pending.is_none());
    }

    // -- removal counter ---------------------------------------------------

    #[test]
    fn removal_is_single_flight() {
        let mut app = make_app();
        app.begin_removal();
        app.begin_removal();
        assert_eq!(app.counter().shown(), 1);
    }

    #[test]
    fn failed_removal_snaps_back() {
        let mut app = make_app();
        app.begin_removal();
        app.on_removal_finished(Err(remote_failure()));
        assert_eq!(app.counter().shown(), 0);
    }

    #[test]
    fn confirmed_removal_adopts_optimistic_count() {
        let mut app = make_app();
        app.begin_removal();
        app.on_removal_finished(Ok(()));
        assert_eq!(app.counter().shown(), 1);
        assert!(!app.counter().is_pending());
    }

    // -- form submission ---------------------------------------------------

    #[test]
    fn valid_submit_enters_pending() {
        let mut app = make_app();
        for ch in "Lamp".chars() {
            app.form_edit(ch);
        }
        app.form_focus_next();
        for ch in "19.5".chars() {
            app.form_edit(ch);
        }
        app.submit_form();
        assert!(app.form().is_pending());
    }

    #[test]
    fn submit_resolution_lands_in_done() {
        let mut app = make_app();
        for ch in "Lamp".chars() {
            app.form_edit(ch);
        }
        app.form_focus_next();
        app.form_edit('5');
        app.submit_form();
        app.on_form_submitted(Ok(product(21, "Lamp")));
        match &app.form().phase {
            SubmitPhase::Done(SubmitOutcome::Accepted { message }) => {
                assert!(message.contains("#21"));
            }
            other => panic!("expected Accepted, got {:?}", other),
        }
    }

    #[test]
    fn empty_title_rejects_without_pending() {
        let mut app = make_app();
        app.submit_form();
        assert!(!app.form().is_pending());
        assert!(matches!(
            app.form().phase,
            SubmitPhase::Done(SubmitOutcome::Rejected { .. })
        ));
    }

    // -- navigation triggers loads ----------------------------------------

    #[test]
    fn entering_catalog_starts_the_load_once() {
        let mut app = make_app();
        app.goto(Screen::Catalog);
        assert!(app.catalog().products.is_loading());
        app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
        app.goto(Screen::Home);
        app.goto(Screen::Catalog);
        assert!(app.catalog().products.as_ready().is_some());
    }

    #[test]
    fn entering_search_expands_the_dataset() {
        let mut app = make_app();
        app.goto(Screen::Search);
        app.on_search_loaded(Ok(vec![product(1, "Bag"), product(2, "Hat")]));
        assert_eq!(app.search().total(), 2 * 170);
    }

    #[test]
    fn search_query_defers_filtering() {
        let mut app = make_app();
        app.goto(Screen::Search);
        app.on_search_loaded(Ok(vec![product(1, "Bag"), product(2, "Hat")]));
        app.search_push('h');
        app.search_push('a');
        assert!(app.search().pending);
        app.on_filter_pass();
        assert!(!app.search().pending);
        assert_eq!(app.search().results.len(), 170);
    }

    // -- showcase ----------------------------------------------------------

    #[test]
    fn advancing_showcase_loads_the_next_id() {
        let mut app = make_app();
        app.goto(Screen::Showcase);
        assert!(app.gallery().fetch.is_loading());
        app.on_showcase_loaded(Ok(product(1, "Bag")));
        app.advance_showcase();
        assert_eq!(app.gallery().product_id, 2);
        assert!(app.gallery().fetch.is_loading());
    }

    #[test]
    fn late_showcase_result_still_lands() {
        let mut app = make_app();
        app.goto(Screen::Showcase);
        app.advance_showcase();
        // The fetch for id 1 resolves after the advance to id 2.
        app.on_showcase_loaded(Ok(product(1, "Bag")));
        assert_eq!(app.gallery().product_id, 2);
        assert!(app.gallery().fetch.as_ready().is_some());
    }
}
