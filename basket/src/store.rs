//! Persistence seam for the cart record.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backing store is `window.localStorage` (see the
//! `client` crate); tests and server rendering use [`MemoryStore`]. Nothing in
//! this crate touches storage except through [`KeyValueStore`].
//!
//! TRADE-OFFS
//! ==========
//! Writes from other tabs are not merged. A save overwrites whatever another
//! context wrote since this context's last load.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;
use crate::model::Cart;

/// Storage key shared by every page that reads or writes the cart.
pub const CART_KEY: &str = "shopCart";

/// String key-value storage with the semantics of the Web Storage API.
pub trait KeyValueStore {
    /// Read the value for `key`; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be reached or refuses the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be reached or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be reached or refuses the write.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory storage. Clones share one map, the way two tabs share one origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the cart encoder.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    /// Raw value currently stored for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

// =============================================================================
// CART STORE
// =============================================================================

/// Callback run after every successful save in this document.
pub type SaveHook = Rc<dyn Fn(&Cart)>;

/// Typed `load`/`save` over a [`KeyValueStore`] for the cart key.
pub struct CartStore<S> {
    storage: S,
    key: String,
    hooks: Vec<SaveHook>,
}

impl<S: KeyValueStore> CartStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_KEY)
    }

    #[must_use]
    pub fn with_key(storage: S, key: &str) -> Self {
        Self { storage, key: key.to_owned(), hooks: Vec::new() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a hook fired after each successful [`CartStore::save`].
    pub fn on_save(&mut self, hook: impl Fn(&Cart) + 'static) {
        self.hooks.push(Rc::new(hook));
    }

    /// Read the cart. Missing, unreadable, and malformed records are all the
    /// empty cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => Cart::from_json_or_empty(&raw),
            Ok(None) => Cart::empty(),
            Err(e) => {
                log::warn!("cart storage read failed, using empty cart: {e}");
                Cart::empty()
            }
        }
    }

    /// Serialize and persist `cart`, then notify save hooks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when encoding fails or the storage rejects the
    /// write; hooks are not run in that case.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set_item(&self.key, &raw)?;
        for hook in &self.hooks {
            hook(cart);
        }
        Ok(())
    }
}
