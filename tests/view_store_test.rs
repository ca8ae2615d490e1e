//! Persisted view preferences.
//!
//! The pagination pair survives restarts: saved values are used
//! verbatim on the next load, and a fresh store falls back to the
//! {1, 10} default.

use admintui::model::ViewModel;
use admintui::store::{ViewStore, DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[test]
fn fresh_store_yields_the_default_view() {
    let store = ViewStore::new_in_memory().unwrap();
    let (page, per_page) = store.load_view().unwrap();
    assert_eq!(page, DEFAULT_PAGE);
    assert_eq!(per_page, DEFAULT_PER_PAGE);
}

#[test]
fn saved_view_is_used_verbatim_on_next_load() {
    let store = ViewStore::new_in_memory().unwrap();
    store.save_page(3).unwrap();
    store.save_per_page(25).unwrap();

    let (page, per_page) = store.load_view().unwrap();
    assert_eq!((page, per_page), (3, 25));

    // And the restored pair seeds the view model unchanged
    let view = ViewModel::new(page, per_page);
    assert_eq!(view.page, 3);
    assert_eq!(view.per_page, 25);
}

#[test]
fn latest_save_wins() {
    let store = ViewStore::new_in_memory().unwrap();
    store.save_page(2).unwrap();
    store.save_per_page(50).unwrap();
    store.save_page(9).unwrap();

    let (page, per_page) = store.load_view().unwrap();
    assert_eq!((page, per_page), (9, 50));
}

#[test]
fn partial_state_mixes_saved_and_default_values() {
    let store = ViewStore::new_in_memory().unwrap();
    store.save_per_page(100).unwrap();

    let (page, per_page) = store.load_view().unwrap();
    assert_eq!(page, DEFAULT_PAGE);
    assert_eq!(per_page, 100);
}
