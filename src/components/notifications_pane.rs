//! Notifications Pane
//!
//! Announcements with reactions and comments from visitors.

use alfonce_core::catalog;
use alfonce_core::models::Notification;
use alfonce_core::TabLoader;
use chrono::Utc;
use leptos::prelude::*;

use crate::components::ReactionBar;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationsPane() -> impl IntoView {
    let store = use_app_store();

    view! {
        <h2>"Notifications"</h2>
        {move || {
            let list = store.notifications().get();
            if list.is_empty() {
                view! { <p class="empty-state">"No notifications yet."</p> }.into_any()
            } else {
                list.into_iter()
                    .map(|notification| view! { <NotificationCard notification=notification /> })
                    .collect_view()
                    .into_any()
            }
        }}
    }
}

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let ctx = use_app_context();
    let (comment, set_comment) = signal(String::new());
    let mine = notification.user_reactions.get(&ctx.user_id()).cloned();
    let posted = notification.timestamp.format("%b %e, %Y %H:%M").to_string();

    let react_id = notification.id.clone();
    let on_react = move |reaction: String| {
        let user_id = ctx.user_id();
        let result = ctx.with_storage(|s| catalog::react_to_notification(s, &react_id, &user_id, &reaction));
        ctx.report_write(&result, None);
        ctx.load(TabLoader::Notifications);
    };

    let comment_id = notification.id.clone();
    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment.get();
        if text.trim().is_empty() {
            return;
        }
        let user_id = ctx.user_id();
        let result = ctx.with_storage(|s| {
            catalog::comment_on_notification(s, &comment_id, &user_id, &text, Utc::now())
        });
        ctx.report_write(&result, None);
        set_comment.set(String::new());
        ctx.load(TabLoader::Notifications);
    };

    view! {
        <article class="notification-card">
            <p class="notification-message">{notification.message}</p>
            <span class="notification-time">{posted}</span>
            <ReactionBar counts=notification.reactions mine=mine on_react=on_react />
            <ul class="comment-list">
                {notification
                    .comments
                    .into_iter()
                    .map(|c| view! { <li class="comment">{c.text}</li> })
                    .collect_view()}
            </ul>
            <form class="comment-form" on:submit=on_comment>
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=move || comment.get()
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                />
                <button type="submit">"Post"</button>
            </form>
        </article>
    }
}
