//! Persistent key-value slot behind the cart.
//!
//! In a page this is browser-local storage; the cart only ever needs `get`
//! and `set` over a string key, so hosts provide a [`KeyValueStore`] and the
//! cart never touches the backend directly.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - In-memory map for tests and headless hosts
//! - `&T` and `Rc<T>` - Share one store between a cart and its host

mod memory;

use std::rc::Rc;

use crate::error::StorageError;

pub use memory::MemoryStore;

/// A synchronous string key-value store.
///
/// Writes overwrite the previous value atomically from the caller's point of
/// view. There is no coordination between writers; the last write wins.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
