//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each tab loader
//! refreshes its own slice from storage.

use leptos::prelude::*;
use reactive_stores::Store;
use alfonce_core::models::{Notification, Order, OtherService, ServiceImage};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Slideshow caption
    pub slideshow_text: String,
    /// Filled slideshow slots
    pub slides: Vec<ServiceImage>,
    /// Other services flagged for the home tab
    pub featured_services: Vec<OtherService>,
    /// Notifications, newest first
    pub notifications: Vec<Notification>,
    /// Orders of the current session
    pub orders: Vec<Order>,
    /// All other services
    pub other_services: Vec<OtherService>,
    /// HTML shown in the developer tab
    pub developer_code: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
