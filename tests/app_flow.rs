//! Cross-screen flows driven through the App aggregate.
//!
//! These mirror the user-visible scenarios: speculate, commit or revert,
//! and the documented quirks (last write wins, no cancellation).

use std::path::PathBuf;

use vitrine::api::{Product, Rating, StoreError};
use vitrine::config::{Config, ConfigStore};
use vitrine::ui::app::{App, Screen};

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

// -- the two canonical cart scenarios -----------------------------------

#[test]
fn empty_cart_speculates_then_commits() {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));

    app.add_selected_to_cart();
    assert_eq!(app.cart().quantity(1), 1, "speculative view is immediate");

    let delta = app.cart().pending.expect("delta in flight");
    app.on_cart_committed(delta, Ok(()));
    assert_eq!(app.cart().committed.get(&1), Some(&1));
}

#[test]
fn populated_cart_speculates_then_reverts() {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));

    // Build committed {1: 2} through two confirmed adds.
    for _ in 0..2 {
        app.add_selected_to_cart();
        let delta = app.cart().pending.expect("delta in flight");
        app.on_cart_committed(delta, Ok(()));
    }
    assert_eq!(app.cart().committed.get(&1), Some(&2));

    app.add_selected_to_cart();
    assert_eq!(app.cart().quantity(1), 3);

    let delta = app.cart().pending.expect("delta in flight");
    app.on_cart_committed(delta, Err(remote_failure()));
    assert_eq!(app.cart().quantity(1), 2, "view reverts to committed");
}

#[test]
fn rapid_adds_are_last_write_wins() {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(vec![product(1, "Bag"), product(2, "Hat")]));

    app.add_selected_to_cart();
    let first = app.cart().pending.expect("first delta");
    app.catalog_move_down();
    app.add_selected_to_cart();

    // The second speculation replaced the first; only product 2 shows.
    assert_eq!(app.cart().quantity(1), 0);
    assert_eq!(app.cart().quantity(2), 1);

    // The first commit still resolves and folds its own delta.
    app.on_cart_committed(first, Ok(()));
    assert_eq!(app.cart().committed.get(&1), Some(&1));
    assert_eq!(app.cart().quantity(2), 1, "second delta still speculative");
}

// -- no cancellation across navigation ----------------------------------

#[test]
fn leaving_a_screen_does_not_cancel_its_fetch() {
    let mut app = make_app();
    app.goto(Screen::Showcase);
    assert!(app.gallery().fetch.is_loading());

    app.goto(Screen::Home);
    assert_eq!(app.screen(), Screen::Home);

    // The abandoned fetch resolves anyway and its result is applied.
    app.on_showcase_loaded(Ok(product(1, "Bag")));
    assert!(app.gallery().fetch.as_ready().is_some());
}

#[test]
fn catalog_failure_then_retry_reloads() {
    let mut app = make_app();
    app.goto(Screen::Catalog);
    app.on_catalog_loaded(Err(remote_failure()));
    assert!(app.catalog().products.error().is_some());

    app.retry_catalog();
    assert!(app.catalog().products.is_loading());

    app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
    assert!(app.catalog().products.as_ready().is_some());
}

// -- deferred search through the app ------------------------------------

#[test]
fn keystrokes_never_get_lost_while_a_pass_is_pending() {
    let mut app = make_app();
    app.goto(Screen::Search);
    app.on_search_loaded(Ok(vec![product(1, "Gold Ring"), product(2, "Bag")]));

    for ch in "gold".chars() {
        app.search_push(ch);
    }
    assert_eq!(app.search().query, "gold");
    assert!(app.search().pending);

    app.on_filter_pass();
    assert_eq!(app.search().results.len(), 170);
}

#[test]
fn each_screen_slice_is_independent() {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(vec![product(1, "Bag")]));
    app.add_selected_to_cart();
    app.begin_removal();

    // Resolving the removal leaves the cart's pending delta untouched.
    app.on_removal_finished(Err(remote_failure()));
    assert_eq!(app.counter().shown(), 0);
    assert!(app.cart().pending.is_some());
}
