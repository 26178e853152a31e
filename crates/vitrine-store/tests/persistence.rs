//! End-to-end persistence tests: a cart written by one store instance
//! must come back intact in the next, and a damaged snapshot must never
//! take the session down.

use vitrine_commerce::seed;
use vitrine_store::{CartStore, Slot, CART_KEY};

fn open_store(dir: &std::path::Path) -> CartStore {
    let slot = Slot::open(dir).unwrap();
    CartStore::open(slot)
}

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let products = seed::products();
    let shirt = &products[0];

    let mut store = open_store(dir.path());
    store.add_item(shirt, "M", "#000000", 2).unwrap();
    store.update_quantity(0, 1).unwrap();
    drop(store);

    let store = open_store(dir.path());
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.total().unwrap().display(), "R$ 269.70");
}

#[test]
fn test_fresh_directory_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    assert!(store.cart().is_empty());
}

#[test]
fn test_corrupt_snapshot_is_discarded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), b"{\"items\": oops").unwrap();

    let store = open_store(dir.path());
    assert!(store.cart().is_empty());
}

#[test]
fn test_recovered_session_can_write_over_corruption() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), b"not even json").unwrap();

    let products = seed::products();
    let mut store = open_store(dir.path());
    store.add_item(&products[5], "Único", "#000000", 1).unwrap();
    drop(store);

    let store = open_store(dir.path());
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().items()[0].name, "Boné Minimalist");
}

#[test]
fn test_rejected_add_writes_no_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let products = seed::products();

    let mut store = open_store(dir.path());
    assert!(store.add_item(&products[0], "M", "#000000", 0).is_err());
    assert!(store.add_item(&products[0], "XXL", "#000000", 1).is_err());
    drop(store);

    let slot = Slot::open(dir.path()).unwrap();
    let snapshot: Option<vitrine_commerce::cart::Cart> = slot.get(CART_KEY).unwrap();
    assert!(snapshot.is_none());
}

#[test]
fn test_remove_and_update_persist_without_explicit_save() {
    let dir = tempfile::tempdir().unwrap();
    let products = seed::products();

    let mut store = open_store(dir.path());
    store.add_item(&products[0], "M", "#000000", 1).unwrap();
    store.add_item(&products[1], "40", "#FFFFFF", 1).unwrap();
    assert!(store.remove_item(0).unwrap());
    drop(store);

    let store = open_store(dir.path());
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().items()[0].name, "Tênis Runner Pro");
}

#[test]
fn test_out_of_bounds_mutations_touch_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    assert!(!store.update_quantity(7, 1).unwrap());
    assert!(!store.remove_item(7).unwrap());
    drop(store);

    let slot = Slot::open(dir.path()).unwrap();
    let snapshot: Option<vitrine_commerce::cart::Cart> = slot.get(CART_KEY).unwrap();
    assert!(snapshot.is_none());
}
