//! Persistence Backends
//!
//! The storage service talks to durable storage only through
//! [`PersistenceBackend`]. Values cross this boundary as JSON strings.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageResult;

/// Raw key/string store behind a [`crate::StorageService`].
///
/// Methods take `&self`: the page is single-threaded and browser storage
/// is itself shared.
pub trait PersistenceBackend {
    /// Read the raw string under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write the raw string under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory backend for tests and environments without local storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<B: PersistenceBackend + ?Sized> PersistenceBackend for &B {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;

    use super::*;
    use crate::error::StorageError;

    /// Backend that can be told to throw, like a full or disabled localStorage.
    #[derive(Debug, Default)]
    pub struct FlakyBackend {
        pub inner: MemoryBackend,
        pub fail_reads: Cell<bool>,
        pub fail_writes: Cell<bool>,
    }

    impl FlakyBackend {
        pub fn failing_writes() -> Self {
            let backend = Self::default();
            backend.fail_writes.set(true);
            backend
        }

        pub fn failing_everything() -> Self {
            let backend = Self::failing_writes();
            backend.fail_reads.set(true);
            backend
        }
    }

    impl PersistenceBackend for FlakyBackend {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            if self.fail_reads.get() {
                return Err(StorageError::Unavailable("reads disabled".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            if self.fail_writes.get() {
                return Err(StorageError::backend(key, "QuotaExceededError"));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            if self.fail_writes.get() {
                return Err(StorageError::backend(key, "SecurityError"));
            }
            self.inner.remove(key)
        }
    }
}
