//! Application Context
//!
//! Storage service, tab controller and config shared via Leptos Context API.

use alfonce_core::{catalog, StorageError, StorageResult, StorageService, TabController, TabLoader, ToastKind, UiConfig};
use alfonce_core::toast::SAVE_FAILED_MESSAGE;
use leptos::prelude::*;

use crate::store::{AppStore, AppStateStoreFields};
use crate::toast::show_notification;

/// Persistence backend of the page
#[cfg(target_arch = "wasm32")]
pub type PageBackend = alfonce_core::LocalStorageBackend;
#[cfg(not(target_arch = "wasm32"))]
pub type PageBackend = alfonce_core::MemoryBackend;

pub type PageStorage = StorageService<PageBackend>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    storage: StoredValue<PageStorage, LocalStorage>,
    config: StoredValue<UiConfig>,
    /// Session id of this browser
    pub user_id: StoredValue<String>,
    /// Tab selection and mobile submenu state
    pub tabs: RwSignal<TabController>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(storage: PageStorage, config: UiConfig, tabs: TabController, user_id: String, store: AppStore) -> Self {
        Self {
            storage: StoredValue::new_local(storage),
            config: StoredValue::new(config),
            user_id: StoredValue::new(user_id),
            tabs: RwSignal::new(tabs),
            store,
        }
    }

    /// Run `f` against the storage service
    pub fn with_storage<R>(&self, f: impl FnOnce(&PageStorage) -> R) -> R {
        self.storage.with_value(f)
    }

    pub fn user_id(&self) -> String {
        self.user_id.get_value()
    }

    /// Show a toast with the configured timings
    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.config.with_value(|config| show_notification(message, kind, config));
    }

    /// Toast a failed write; `success` is shown otherwise.
    pub fn report_write<T>(&self, result: &StorageResult<T>, success: Option<&str>) {
        match result {
            Ok(_) => {
                if let Some(message) = success {
                    self.notify(message, ToastKind::Success);
                }
            }
            Err(e @ (StorageError::NotFound(_) | StorageError::InvalidSlot(_))) => {
                log::warn!("Change not applied: {}", e)
            }
            Err(e) => {
                log::error!("Error saving data: {}", e);
                self.notify(SAVE_FAILED_MESSAGE, ToastKind::Error);
            }
        }
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.tabs.with(|t| t.is_active(tab))
    }

    pub fn menu_open(&self) -> bool {
        self.tabs.with(|t| t.menu_open())
    }

    pub fn toggle_menu(&self) {
        self.tabs.update(|t| {
            t.toggle_menu();
        });
    }

    /// Handle a click on a tab control
    pub fn select_tab(&self, name: &str) {
        let width = viewport_width();
        let mut loader = None;
        self.tabs.update(|t| {
            t.click(name, width, |l| loader = Some(l));
        });
        if let Some(loader) = loader {
            self.load(loader);
        }
    }

    /// Refresh the store slice behind a tab
    pub fn load(&self, loader: TabLoader) {
        log::debug!("Loading {:?}", loader);
        let store = self.store;
        match loader {
            TabLoader::Notifications => {
                let list = self.with_storage(|s| catalog::notifications(s));
                *store.notifications().write() = or_log(list, "notifications");
            }
            TabLoader::Orders => {
                let user_id = self.user_id();
                let list = self.with_storage(|s| catalog::orders_for_user(s, &user_id));
                *store.orders().write() = or_log(list, "orders");
            }
            TabLoader::OtherServices => {
                let list = self.with_storage(|s| catalog::other_services(s));
                *store.other_services().write() = or_log(list, "other services");
            }
            TabLoader::Developer => {
                *store.developer_code().write() = self.with_storage(|s| catalog::developer_code(s));
            }
        }
    }

    /// Refresh the home tab: slideshow and featured services
    pub fn load_home(&self) {
        let store = self.store;
        let (text, slides, featured) = self.with_storage(|s| {
            (
                catalog::slideshow_text(s),
                catalog::slideshow_images(s).into_iter().map(|(_, image)| image).collect::<Vec<_>>(),
                catalog::featured_services(s),
            )
        });
        *store.slideshow_text().write() = text;
        *store.slides().write() = slides;
        *store.featured_services().write() = or_log(featured, "featured services");
    }
}

fn or_log<T: Default>(result: StorageResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        log::error!("Error retrieving {}: {}", what, e);
        T::default()
    })
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX)
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
