//! Other Services Pane
//!
//! Cards for offerings outside the fixed categories.

use alfonce_core::catalog;
use alfonce_core::models::{MediaType, OtherService};
use alfonce_core::TabLoader;
use leptos::prelude::*;

use crate::components::ReactionBar;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OtherServicesPane() -> impl IntoView {
    let store = use_app_store();

    view! {
        <h2>"Other Services"</h2>
        {move || {
            let services = store.other_services().get();
            if services.is_empty() {
                view! { <p class="empty-state">"No other services available."</p> }.into_any()
            } else {
                view! {
                    <div class="service-list">
                        {services
                            .into_iter()
                            .map(|service| view! { <ServiceCard service=service /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// One service with media, bullet items and reactions
#[component]
pub fn ServiceCard(service: OtherService) -> impl IntoView {
    let ctx = use_app_context();
    let mine = service.user_reactions.get(&ctx.user_id()).cloned();
    let items: Vec<String> = service.item_lines().into_iter().map(str::to_string).collect();

    let service_id = service.id.clone();
    let on_react = move |reaction: String| {
        let user_id = ctx.user_id();
        let result = ctx.with_storage(|s| catalog::react_to_service(s, &service_id, &user_id, &reaction));
        ctx.report_write(&result, None);
        ctx.load(TabLoader::OtherServices);
        ctx.load_home();
    };

    let media = match service.media_type {
        MediaType::Image => view! {
            <img class="service-media" src=service.media_url.clone() alt=service.title.clone() />
        }
        .into_any(),
        MediaType::Video => view! {
            <video class="service-media" src=service.media_url.clone() controls=true></video>
        }
        .into_any(),
    };

    view! {
        <article class="service-card">
            {media}
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-items">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
            <ReactionBar counts=service.reactions mine=mine on_react=on_react />
        </article>
    }
}
