use std::cell::Cell;

use super::*;
use crate::model::CartLine;

struct OfflineStore;

impl KeyValueStore for OfflineStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.to_owned(), reason: "QuotaExceededError".to_owned() })
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn one_line_cart(id: &str, quantity: u32) -> Cart {
    let mut cart = Cart {
        items: vec![CartLine {
            id: id.to_owned(),
            title: "Шорты".to_owned(),
            price: "990 ₽".to_owned(),
            image: "img/shorts.jpg".to_owned(),
            quantity,
        }],
        total_count: 0,
    };
    cart.recount();
    cart
}

// =============================================================
// load
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    let store = CartStore::new(MemoryStore::new());
    assert_eq!(store.load(), Cart::empty());
}

#[test]
fn load_garbage_is_empty() {
    for raw in ["not json", "{}", "null", "{\"items\":42}"] {
        let memory = MemoryStore::new();
        memory.insert_raw(CART_KEY, raw);
        assert_eq!(CartStore::new(memory).load(), Cart::empty(), "raw value {raw:?}");
    }
}

#[test]
fn load_unavailable_storage_is_empty() {
    assert_eq!(CartStore::new(OfflineStore).load(), Cart::empty());
}

#[test]
fn load_reads_only_its_own_key() {
    let memory = MemoryStore::new();
    memory.insert_raw("wbAuth", "{\"phone\":\"+7\"}");
    let store = CartStore::new(memory);
    assert_eq!(store.key(), "shopCart");
    assert_eq!(store.load(), Cart::empty());
}

// =============================================================
// save
// =============================================================

#[test]
fn save_then_load_returns_same_cart() {
    let store = CartStore::new(MemoryStore::new());
    let cart = one_line_cart("5", 2);
    store.save(&cart).unwrap();
    assert_eq!(store.load(), cart);
}

#[test]
fn save_writes_contract_json_under_cart_key() {
    let memory = MemoryStore::new();
    let store = CartStore::new(memory.clone());
    store.save(&one_line_cart("5", 2)).unwrap();
    let raw = memory.raw(CART_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["totalCount"], 2);
    assert_eq!(value["items"][0]["id"], "5");
    assert_eq!(value["items"][0]["quantity"], 2);
    assert_eq!(value["items"][0]["price"], "990 ₽");
}

#[test]
fn save_runs_hooks_with_saved_cart() {
    let seen = Rc::new(Cell::new(0u32));
    let mut store = CartStore::new(MemoryStore::new());
    let seen_in_hook = Rc::clone(&seen);
    store.on_save(move |cart| seen_in_hook.set(cart.total_count));

    store.save(&one_line_cart("1", 3)).unwrap();
    assert_eq!(seen.get(), 3);
}

#[test]
fn failed_save_reports_error_and_skips_hooks() {
    let fired = Rc::new(Cell::new(false));
    let mut store = CartStore::new(OfflineStore);
    let fired_in_hook = Rc::clone(&fired);
    store.on_save(move |_| fired_in_hook.set(true));

    assert!(matches!(store.save(&one_line_cart("1", 1)), Err(StoreError::Write { .. })));
    assert!(!fired.get());
}

// =============================================================
// Cross-context behavior
// =============================================================

#[test]
fn two_contexts_last_write_wins() {
    let origin = MemoryStore::new();
    let tab_a = CartStore::new(origin.clone());
    let tab_b = CartStore::new(origin.clone());

    // Both tabs read the same starting state...
    let from_a = one_line_cart("a", 1);
    let from_b = one_line_cart("b", 4);
    // ...and write without seeing each other.
    tab_a.save(&from_a).unwrap();
    tab_b.save(&from_b).unwrap();

    assert_eq!(tab_a.load(), from_b);
    assert!(tab_a.load().line("a").is_none());
}

#[test]
fn rc_wrapped_storage_is_a_store() {
    let shared = Rc::new(MemoryStore::new());
    let store = CartStore::new(Rc::clone(&shared));
    store.save(&one_line_cart("x", 1)).unwrap();
    assert!(shared.raw(CART_KEY).is_some());
}

#[test]
fn memory_store_remove_is_shared_and_idempotent() {
    let memory = MemoryStore::new();
    let other_tab = memory.clone();
    memory.insert_raw("wbAuth", "{}");

    other_tab.remove_item("wbAuth").unwrap();
    assert_eq!(memory.raw("wbAuth"), None);
    assert!(memory.remove_item("wbAuth").is_ok());
}
