//! Keyed persistence collaborator.
//!
//! Stores and the option registry talk to a [`StorageBackend`] instead of the
//! filesystem directly. [`JsonStorage`] is the production backend;
//! [`MemoryStorage`] backs tests and embedding hosts that manage their own
//! persistence.

pub mod json_backend;

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

pub use json_backend::JsonStorage;

/// Keyed load/save contract. `load` never fails: a missing or corrupt payload
/// yields the type's default and the corrupt value is discarded, so callers
/// always start from a usable snapshot.
pub trait StorageBackend {
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

/// In-memory backend with the same recovery semantics as [`JsonStorage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw payload, bypassing serialization. Lets tests plant
    /// corrupt entries.
    pub fn seed_raw(&self, key: &str, payload: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }
}

impl StorageBackend for MemoryStorage {
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let mut entries = self.entries.borrow_mut();
        match entries.get(key) {
            None => T::default(),
            Some(raw) => match serde_json::from_str(raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, %err, "discarding corrupt stored payload");
                    entries.remove(key);
                    T::default()
                }
            },
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.entries.borrow_mut().insert(key.to_string(), json);
        Ok(())
    }
}
