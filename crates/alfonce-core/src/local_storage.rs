//! Browser localStorage backend
//!
//! `window.localStorage` may be missing (privacy modes, sandboxed iframes)
//! or throw on write (quota exceeded). Both surface as [`StorageError`].

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::backend::PersistenceBackend;
use crate::error::{StorageError, StorageResult};

/// [`PersistenceBackend`] over `window.localStorage`.
///
/// The handle is looked up on every call, so storage that becomes available
/// later is picked up without rebuilding the service.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> StorageResult<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl PersistenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::backend(key, js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::backend(key, js_message(&e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::backend(key, js_message(&e)))
    }
}
