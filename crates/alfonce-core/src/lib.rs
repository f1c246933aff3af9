//! ALFONCE SERVICES Core
//!
//! Platform-independent layer behind the page:
//! - storage: key/value service with memory fallback over a persistence backend
//! - seed: first-run demo content
//! - catalog: typed accessors used by the UI handlers
//! - tabs: tab selection state machine

mod error;
mod backend;
mod storage;
mod config;

pub mod keys;
pub mod models;
pub mod session;
pub mod seed;
pub mod catalog;
pub mod tabs;
pub mod toast;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;

pub use error::{StorageError, StorageResult};
pub use backend::{PersistenceBackend, MemoryBackend};
pub use storage::StorageService;
pub use config::UiConfig;
pub use seed::{initialize_default_data, SeedContext, SeedReport};
pub use tabs::{TabController, TabLoader, TabTransition};
pub use toast::ToastKind;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;
