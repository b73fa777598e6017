//! Durable cart state.
//!
//! [`CartStore`] owns one storage slot holding the JSON-serialized cart and
//! is the only place the cart changes. Every mutation is load, apply, save;
//! there is no cached copy, so another tab writing the same slot is picked
//! up on the next read and the last writer wins.
//!
//! Failures never reach the page: unreadable or malformed slots load as an
//! empty cart and failed writes are logged and dropped.

use tracing::instrument;

use local_cart_core::{Applied, Cart, CartAction, CartInput, LineId};

use crate::config::{CartConfig, DEFAULT_STORAGE_KEY};
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Cart persistence and the cart state-transition entry point.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over the default `local_cart` slot.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create a store over a named slot.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Create a store over the slot named by `config`.
    pub fn from_config(storage: S, config: &CartConfig) -> Self {
        Self::with_key(storage, config.storage_key.clone())
    }

    /// The storage slot in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the cart, reporting why it could not be read.
    ///
    /// A missing or blank slot is an empty cart, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the backend fails or the slot does not hold a
    /// cart object.
    pub fn try_load(&self) -> Result<Cart> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Cart::new());
        };
        if raw.trim().is_empty() {
            return Ok(Cart::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Read the cart, degrading to an empty cart on any failure.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Cart {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable cart");
            Cart::new()
        })
    }

    /// Overwrite the slot with `cart`, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if serialization or the backend write fails.
    pub fn try_save(&self, cart: &Cart) -> Result<()> {
        let json = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Overwrite the slot with `cart`, logging failures.
    #[instrument(skip(self, cart), fields(key = %self.key, lines = cart.len()))]
    pub fn save(&self, cart: &Cart) {
        if let Err(e) = self.try_save(cart) {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }

    /// Apply `action` to the line named by `input.id` and persist the result.
    ///
    /// Inputs without a usable id change nothing and skip the write. See
    /// [`Cart::apply`] for the quantity rules.
    #[instrument(skip(self, input), fields(key = %self.key, id = ?input.id))]
    pub fn mutate(&self, action: CartAction, input: &CartInput) -> Applied {
        if LineId::coerce(input.id.as_deref()).is_none() {
            tracing::debug!("Ignoring cart mutation without a product id");
            return Applied::Ignored;
        }

        let mut cart = self.load();
        let applied = cart.apply(action, input);
        self.save(&cart);

        tracing::debug!(?applied, "Cart updated");
        applied
    }

    /// Overwrite the slot with an empty cart.
    pub fn clear(&self) {
        self.save(&Cart::new());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::{CartError, StorageError};
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
    }

    fn widget() -> CartInput {
        CartInput::for_id("p1")
            .name("Widget")
            .price(Decimal::from(10))
            .qty(2)
    }

    #[test]
    fn test_load_missing_slot() {
        let storage = MemoryStore::new();
        let store = CartStore::new(&storage);
        assert!(store.load().is_empty());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_blank_slot() {
        let storage = MemoryStore::with_entry("local_cart", "");
        assert!(CartStore::new(&storage).try_load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_slot() {
        for raw in ["{\"p1\":", "null", "[1,2]", "\"cart\"", "{\"p1\": 3}"] {
            let storage = MemoryStore::with_entry("local_cart", raw);
            let store = CartStore::new(&storage);
            assert!(matches!(
                store.try_load(),
                Err(CartError::Serialization(_))
            ));
            assert!(store.load().is_empty(), "slot {raw:?} should load empty");
        }
    }

    #[test]
    fn test_load_backend_failure() {
        let store = CartStore::new(BrokenStore);
        assert!(matches!(store.try_load(), Err(CartError::Storage(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_backend_failure_is_swallowed() {
        let store = CartStore::new(BrokenStore);
        assert!(store.try_save(&Cart::new()).is_err());
        store.save(&Cart::new());
        assert_eq!(store.mutate(CartAction::Add, &widget()), Applied::Stored(2));
    }

    #[test]
    fn test_mutate_persists() {
        let storage = MemoryStore::new();
        let store = CartStore::new(&storage);
        store.mutate(CartAction::Add, &widget());

        let raw = storage.raw("local_cart").unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["p1"]["qty"], 2);
        assert_eq!(store.load().get("p1").unwrap().name, "Widget");
    }

    #[test]
    fn test_mutate_without_id_skips_write() {
        let storage = MemoryStore::new();
        let store = CartStore::new(&storage);
        let mut input = widget();
        input.id = Some(String::new());

        assert_eq!(store.mutate(CartAction::Add, &input), Applied::Ignored);
        assert!(storage.raw("local_cart").is_none());
    }

    #[test]
    fn test_mutate_recovers_from_corrupt_slot() {
        let storage = MemoryStore::with_entry("local_cart", "{not json");
        let store = CartStore::new(&storage);
        store.mutate(CartAction::Inc, &CartInput::for_id("p1"));

        let cart = store.load();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("p1").unwrap().qty, 1);
    }

    #[test]
    fn test_custom_key_and_clear() {
        let storage = MemoryStore::new();
        let store = CartStore::with_key(&storage, "other_cart");
        store.mutate(CartAction::Add, &widget());
        assert!(storage.raw("local_cart").is_none());
        assert_eq!(store.key(), "other_cart");

        store.clear();
        assert_eq!(storage.raw("other_cart").as_deref(), Some("{}"));
        assert!(store.load().is_empty());
    }
}
