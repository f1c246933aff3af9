//! Tab Bar Component
//!
//! Tab controls (`.tab[data-tab]`) inside the collapsible `.submenu`, plus
//! the `.tab-content` panes they switch between.

use alfonce_core::TabController;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Tab bar with mobile menu button
#[component]
pub fn TabBar(tabs: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="tab-nav">
            <button class="mobile-menu-button" on:click=move |_| ctx.toggle_menu()>
                "☰"
            </button>
            <div class=move || if ctx.menu_open() { "submenu active" } else { "submenu" }>
                {tabs
                    .into_iter()
                    .map(|(name, label)| {
                        view! {
                            <button
                                class=move || if ctx.is_active(name) { "tab active" } else { "tab" }
                                data-tab=name
                                on:click=move |_| ctx.select_tab(name)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Content pane `#<name>-content`, visible while its tab is active
#[component]
pub fn TabPane(#[prop(into)] name: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let id = TabController::content_id(&name);

    view! {
        <section
            id=id
            class=move || if ctx.is_active(&name) { "tab-content active" } else { "tab-content" }
        >
            {children()}
        </section>
    }
}
