//! ALFONCE SERVICES Frontend App
//!
//! Seeds storage, then renders the tab bar and one pane per tab.

use alfonce_core::seed::{initialize_default_data, SeedContext};
use alfonce_core::toast::SAVE_FAILED_MESSAGE;
use alfonce_core::{session, StorageService, TabController, ToastKind, UiConfig};
use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DeveloperPane, HomePane, NotificationsPane, OrdersPane, OtherServicesPane, TabBar, TabPane};
use crate::context::{AppContext, PageBackend};
use crate::store::AppState;
use crate::toast::show_notification;

/// `data-tab` names with their labels, in display order
pub const TABS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("notifications", "Notifications"),
    ("orders", "My Orders"),
    ("other-services", "Other Services"),
    ("developer", "Developer"),
];

/// Read overrides from `<script id="ui-config" type="application/json">`,
/// falling back to the defaults.
fn load_config() -> UiConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("ui-config"))
        .and_then(|el| el.text_content());
    match json {
        Some(json) => UiConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed ui-config: {}", e);
            UiConfig::default()
        }),
        None => UiConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let storage = StorageService::new(PageBackend::default());

    let report = initialize_default_data(&storage, &SeedContext::new(Utc::now(), js_sys::Math::random()));
    if !report.is_clean() {
        for e in &report.failures {
            log::error!("Error storing default data: {}", e);
        }
        show_notification(SAVE_FAILED_MESSAGE, ToastKind::Error, &config);
    }

    let user_id = session::current_user_id(&storage).unwrap_or_default();
    let tabs = TabController::new(TABS.iter().map(|(name, _)| *name), &config);
    let store = Store::new(AppState::default());

    let ctx = AppContext::new(storage, config, tabs, user_id, store);
    provide_context(ctx);
    provide_context(store);

    ctx.load_home();
    // Panes other than home are filled when their tab is clicked; the
    // default tab may be one of them.
    if let Some(loader) = ctx.tabs.with_untracked(|t| t.active().and_then(alfonce_core::TabLoader::for_tab)) {
        ctx.load(loader);
    }

    view! {
        <div class="app-layout">
            <header class="site-header">
                <h1>"ALFONCE SERVICES"</h1>
                <TabBar tabs=TABS.to_vec() />
            </header>

            <main class="main-content">
                <TabPane name="home">
                    <HomePane />
                </TabPane>
                <TabPane name="notifications">
                    <NotificationsPane />
                </TabPane>
                <TabPane name="orders">
                    <OrdersPane />
                </TabPane>
                <TabPane name="other-services">
                    <OtherServicesPane />
                </TabPane>
                <TabPane name="developer">
                    <DeveloperPane />
                </TabPane>
            </main>
        </div>
    }
}
