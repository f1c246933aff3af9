//! Home Pane
//!
//! Slideshow, the six category galleries and services featured on the main page.

use alfonce_core::catalog;
use alfonce_core::keys::ServiceCategory;
use alfonce_core::models::ServiceImage;
use leptos::prelude::*;

use crate::components::ServiceCard;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePane() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Slideshow />

        <h2>"Our Services"</h2>
        <div class="category-grid">
            {ServiceCategory::ALL
                .into_iter()
                .map(|category| view! { <CategoryGallery category=category /> })
                .collect_view()}
        </div>

        {move || {
            let featured = store.featured_services().get();
            (!featured.is_empty())
                .then(|| {
                    view! {
                        <h2>"Featured"</h2>
                        <div class="service-list">
                            {featured
                                .into_iter()
                                .map(|service| view! { <ServiceCard service=service /> })
                                .collect_view()}
                        </div>
                    }
                })
        }}
    }
}

/// Slideshow over the filled slots with previous/next controls
#[component]
fn Slideshow() -> impl IntoView {
    let store = use_app_store();
    let (current, set_current) = signal(0usize);

    let step = move |delta: isize| {
        let len = store.slides().read().len();
        if len == 0 {
            return;
        }
        set_current.update(|i| *i = (*i as isize + delta).rem_euclid(len as isize) as usize);
    };

    view! {
        <div class="slideshow">
            {move || {
                let slides = store.slides().get();
                match slides.get(current.get() % slides.len().max(1)) {
                    Some(slide) => view! {
                        <img class="slide" src=slide.url.clone() alt=slide.id.clone() />
                    }
                    .into_any(),
                    None => view! { <div class="slide slide-empty"></div> }.into_any(),
                }
            }}
            <p class="slideshow-text">{move || store.slideshow_text().get()}</p>
            <button class="slide-prev" on:click=move |_| step(-1)>"‹"</button>
            <button class="slide-next" on:click=move |_| step(1)>"›"</button>
        </div>
    }
}

#[component]
fn CategoryGallery(category: ServiceCategory) -> impl IntoView {
    let ctx = use_app_context();
    let images: Vec<ServiceImage> = ctx
        .with_storage(|s| catalog::category_images(s, category))
        .unwrap_or_else(|e| {
            log::error!("Error retrieving {} images: {}", category.slug(), e);
            Vec::new()
        });

    view! {
        <div class="category-card" id=category.slug()>
            <h3>{category.title()}</h3>
            <div class="category-images">
                {images
                    .into_iter()
                    .map(|image| view! { <img src=image.url alt=image.id loading="lazy" /> })
                    .collect_view()}
            </div>
        </div>
    }
}
