//! Developer Pane
//!
//! Live preview of the stored HTML snippet. An admin login unlocks the code
//! editor and the slideshow image slots.

use alfonce_core::keys::SLIDESHOW_SLOTS;
use alfonce_core::models::ServiceImage;
use alfonce_core::catalog;
use alfonce_core::{TabLoader, ToastKind};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DeveloperPane() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let unlocked = RwSignal::new(false);
    // None until the textarea is edited
    let draft = RwSignal::new(None::<String>);

    let on_save = move |_| {
        let html = draft
            .get_untracked()
            .unwrap_or_else(|| store.developer_code().get_untracked());
        let result = ctx.with_storage(|s| catalog::save_developer_code(s, &html));
        ctx.report_write(&result, Some("Code saved successfully!"));
        draft.set(None);
        ctx.load(TabLoader::Developer);
    };

    view! {
        <h2>"Developer"</h2>
        <div class="developer-preview" inner_html=move || store.developer_code().get()></div>

        <Show
            when=move || unlocked.get()
            fallback=move || view! { <AdminLogin on_success=move |_| unlocked.set(true) /> }
        >
            <textarea
                class="developer-editor"
                prop:value=move || draft.get().unwrap_or_else(|| store.developer_code().get())
                on:input=move |ev| draft.set(Some(event_target_value(&ev)))
            ></textarea>
            <button class="developer-save" on:click=on_save>"Save"</button>
            <SlideshowEditor />
        </Show>
    }
}

#[component]
fn SlideshowEditor() -> impl IntoView {
    let ctx = use_app_context();
    let (slot, set_slot) = signal(0usize);
    let (url, set_url) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = url.get();
        if url.trim().is_empty() {
            return;
        }
        let slot = slot.get();
        let image = ServiceImage::new(url.trim(), format!("slide{}", slot));
        let result = ctx.with_storage(|s| catalog::set_slideshow_image(s, slot, &image));
        ctx.report_write(&result, Some("Slideshow image updated!"));
        set_url.set(String::new());
        ctx.load_home();
    };

    view! {
        <form class="slideshow-editor" on:submit=on_submit>
            <select on:change=move |ev| {
                if let Ok(n) = event_target_value(&ev).parse() {
                    set_slot.set(n);
                }
            }>
                {(0..SLIDESHOW_SLOTS)
                    .map(|i| view! { <option value=i.to_string()>{format!("Slide {}", i + 1)}</option> })
                    .collect_view()}
            </select>
            <input
                type="url"
                placeholder="Image URL"
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <button type="submit">"Set slide"</button>
        </form>
    }
}

#[component]
fn AdminLogin(#[prop(into)] on_success: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ok = ctx.with_storage(|s| catalog::verify_admin(s, &username.get(), &password.get()));
        if ok {
            set_password.set(String::new());
            on_success.run(());
        } else {
            ctx.notify("Invalid username or password", ToastKind::Error);
        }
    };

    view! {
        <form class="admin-login" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Unlock editor"</button>
        </form>
    }
}
