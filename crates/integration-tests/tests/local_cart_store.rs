//! Integration tests for cart persistence and mutation rules.
//!
//! These run `CartStore` over an in-memory slot and check what ends up in
//! storage, including slots written by the page script before this crate.

#![allow(clippy::unwrap_used)]

use local_cart_core::{Applied, Cart, CartAction, CartInput, coerce_price};
use local_cart_storefront::CartStore;
use local_cart_storefront::storage::MemoryStore;
use rust_decimal::Decimal;
use serde_json::{Value, json};

const KEY: &str = "local_cart";

fn widget() -> CartInput {
    CartInput::for_id("p1")
        .name("Widget")
        .price(Decimal::from(10))
        .qty(2)
}

fn stored_json(storage: &MemoryStore) -> Value {
    serde_json::from_str(&storage.raw(KEY).unwrap()).unwrap()
}

// =============================================================================
// Mutation Rules
// =============================================================================

#[test]
fn test_add_on_empty_cart() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);

    store.mutate(CartAction::Add, &widget());

    assert_eq!(
        stored_json(&storage),
        json!({"p1": {"id": "p1", "name": "Widget", "price": 10, "qty": 2}})
    );
}

#[test]
fn test_dec_at_one_removes_line() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    store.mutate(CartAction::Add, &widget().qty(1));

    assert_eq!(
        store.mutate(CartAction::Dec, &CartInput::for_id("p1")),
        Applied::Removed
    );
    assert_eq!(stored_json(&storage), json!({}));
}

#[test]
fn test_set_zero() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);

    // Absent line: nothing to remove, cart stays empty.
    store.mutate(CartAction::Set, &CartInput::for_id("p1").qty(0));
    assert!(store.load().is_empty());

    store.mutate(CartAction::Add, &widget());
    store.mutate(CartAction::Add, &CartInput::for_id("p2").qty(1));
    store.mutate(CartAction::Set, &CartInput::for_id("p1").qty(0));

    let cart = store.load();
    assert!(cart.get("p1").is_none());
    assert_eq!(cart.get("p2").unwrap().qty, 1);
}

#[test]
fn test_empty_id_never_changes_state() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    store.mutate(CartAction::Add, &widget());
    let before = storage.raw(KEY);

    for action in [
        CartAction::Add,
        CartAction::Inc,
        CartAction::Dec,
        CartAction::Set,
        CartAction::Remove,
    ] {
        let input = CartInput {
            id: Some(String::new()),
            ..widget()
        };
        assert_eq!(store.mutate(action, &input), Applied::Ignored);
    }
    assert_eq!(storage.raw(KEY), before);
}

#[test]
fn test_inc_dec_sequence() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    let p1 = CartInput::for_id("p1");

    store.mutate(CartAction::Inc, &p1);
    store.mutate(CartAction::Inc, &p1);
    store.mutate(CartAction::Inc, &p1);
    store.mutate(CartAction::Dec, &p1);
    assert_eq!(store.load().get("p1").unwrap().qty, 2);

    store.mutate(CartAction::Remove, &p1);
    assert!(store.load().is_empty());
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_load_is_idempotent() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    store.mutate(CartAction::Add, &widget());

    assert_eq!(store.load(), store.load());
}

#[test]
fn test_save_then_load_round_trip() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    let mut cart = Cart::new();
    cart.apply(CartAction::Add, &widget());
    cart.apply(
        CartAction::Add,
        &CartInput::for_id("p2")
            .name("Șurubelniță")
            .price(Decimal::new(12990, 2))
            .qty(5),
    );

    store.save(&cart);
    assert_eq!(store.load(), cart);
}

#[test]
fn test_largest_price_survives_reload() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    store.mutate(
        CartAction::Add,
        &CartInput::for_id("keep").name("Keep").price(Decimal::from(5)).qty(1),
    );
    store.mutate(
        CartAction::Add,
        &CartInput::for_id("big")
            .name("Big")
            .price(coerce_price(Some("79228162514264337593543950335")))
            .qty(1),
    );

    assert!(
        storage
            .raw(KEY)
            .unwrap()
            .contains("\"price\":79228162514264337593543950335")
    );
    let cart = store.try_load().unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get("big").unwrap().price, Decimal::MAX);
    assert_eq!(cart.get("keep").unwrap().qty, 1);
}

#[test]
fn test_long_fraction_price_round_trip() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    let mut cart = Cart::new();
    cart.apply(
        CartAction::Add,
        &CartInput::for_id("p1").price(coerce_price(Some("0.12345678901234567891"))),
    );

    store.save(&cart);
    let loaded = store.load();
    assert_eq!(loaded, cart);
    assert_eq!(
        loaded.get("p1").unwrap().price.to_string(),
        "0.12345678901234567891"
    );
}

#[test]
fn test_truncated_json_loads_empty() {
    let storage = MemoryStore::with_entry(KEY, r#"{"p1":{"id":"p1","name":"Wid"#);
    let store = CartStore::new(&storage);
    assert!(store.load().is_empty());
    assert!(store.try_load().is_err());
}

#[test]
fn test_reads_cart_written_by_page_script() {
    let raw = r#"{"12":{"id":"12","name":"Bormașină percutie","price":349.99,"qty":1},"7":{"id":"7","name":"Ciocan","price":45,"qty":3}}"#;
    let storage = MemoryStore::with_entry(KEY, raw);
    let store = CartStore::new(&storage);

    let cart = store.load();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get("12").unwrap().price, Decimal::new(34999, 2));
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total(), Decimal::new(48499, 2));

    store.mutate(CartAction::Inc, &CartInput::for_id("7"));
    assert_eq!(stored_json(&storage)["7"]["qty"], 4);
    assert_eq!(stored_json(&storage)["12"]["name"], "Bormașină percutie");
}

#[test]
fn test_storage_cleared_externally() {
    let storage = MemoryStore::new();
    let store = CartStore::new(&storage);
    store.mutate(CartAction::Add, &widget());

    storage.remove(KEY);
    assert!(store.load().is_empty());

    store.mutate(CartAction::Inc, &CartInput::for_id("p1"));
    assert_eq!(store.load().get("p1").unwrap().qty, 1);
}

#[test]
fn test_last_writer_wins_across_stores() {
    let storage = MemoryStore::new();
    let tab_a = CartStore::new(&storage);
    let tab_b = CartStore::new(&storage);

    tab_a.mutate(CartAction::Add, &widget());
    tab_b.mutate(CartAction::Inc, &CartInput::for_id("p1"));

    assert_eq!(tab_a.load().get("p1").unwrap().qty, 3);
}
