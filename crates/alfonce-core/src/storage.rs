//! Storage Service
//!
//! Key/value store that mirrors every value into an in-memory map and into
//! a [`PersistenceBackend`]. Reads prefer the backend and fall back to memory,
//! so a failing backend degrades to session-only durability.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::backend::PersistenceBackend;
use crate::error::{StorageError, StorageResult};

/// Storage service owning its memory copy and backend
#[derive(Debug)]
pub struct StorageService<B> {
    memory: RefCell<HashMap<String, String>>,
    backend: B,
}

impl<B: PersistenceBackend> StorageService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            memory: RefCell::new(HashMap::new()),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Store `value` under `key`.
    ///
    /// The memory copy is always written once serialization succeeds. An
    /// `Err` after that point means only the durable write failed.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value).map_err(|source| {
            log::error!("Error storing data for `{}`: {}", key, source);
            StorageError::Serialize {
                key: key.to_string(),
                source,
            }
        })?;

        self.memory.borrow_mut().insert(key.to_string(), json.clone());

        match self.backend.set(key, &json) {
            Ok(()) => {
                log::debug!("Data saved to localStorage: {}", key);
                Ok(())
            }
            Err(e) => {
                log::error!("Error storing in localStorage: {}", e);
                Err(e)
            }
        }
    }

    /// Read `key` as `T`.
    ///
    /// Backend first; an absent, empty, unreadable or undecodable backend
    /// value falls back to the memory copy. `Ok(None)` when neither holds it.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.backend.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => log::error!("Error decoding `{}` from localStorage: {}", key, e),
            },
            Ok(_) => {}
            Err(e) => log::error!("Error retrieving from localStorage: {}", e),
        }

        self.from_memory(key)
    }

    /// Read `key` as `T` without skipping over undecodable data.
    ///
    /// Like [`Self::get_item`], except a backend value that is present but
    /// does not decode is an `Err(StorageError::Decode)` instead of a
    /// fallback. Read-modify-write paths start from this so they never
    /// replace records they could not read.
    pub fn load_item<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.backend.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => {
                return serde_json::from_str(&raw).map(Some).map_err(|source| {
                    log::error!("Refusing to use undecodable `{}`: {}", key, source);
                    StorageError::Decode {
                        key: key.to_string(),
                        source,
                    }
                });
            }
            Ok(_) => {}
            Err(e) => log::error!("Error retrieving from localStorage: {}", e),
        }

        self.from_memory(key)
    }

    fn from_memory<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let memory = self.memory.borrow();
        let Some(raw) = memory.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Untyped read
    pub fn get_value(&self, key: &str) -> StorageResult<Option<Value>> {
        self.get_item::<Value>(key)
    }

    /// True when `key` holds a non-null value in either store.
    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.get_value(key), Ok(Some(v)) if !v.is_null())
    }

    /// Delete `key` from memory and from the backend.
    pub fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.memory.borrow_mut().remove(key);
        match self.backend.remove(key) {
            Ok(()) => {
                log::debug!("Data removed from localStorage: {}", key);
                Ok(())
            }
            Err(e) => {
                log::error!("Error removing from localStorage: {}", e);
                Err(e)
            }
        }
    }

    /// Read-modify-write of a list stored under `key`.
    ///
    /// A missing key starts from an empty list; a list that does not decode
    /// is left untouched and reported.
    pub fn update_list<T, R>(&self, key: &str, f: impl FnOnce(&mut Vec<T>) -> R) -> StorageResult<R>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut list: Vec<T> = self.load_item(key)?.unwrap_or_default();
        let out = f(&mut list);
        self.set_item(key, &list)?;
        Ok(out)
    }
}
