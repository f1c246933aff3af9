//! Orders Pane
//!
//! Order form and the orders placed from this browser session. The owner
//! password unlocks every order with status controls.

use alfonce_core::catalog;
use alfonce_core::keys::ServiceCategory;
use alfonce_core::models::{Order, OrderStatus};
use alfonce_core::{TabLoader, ToastKind};
use chrono::Utc;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OrdersPane() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (service, set_service) = signal(ServiceCategory::ALL[0].slug().to_string());
    let (details, set_details) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = details.get();
        if text.trim().is_empty() {
            return;
        }
        let user_id = ctx.user_id();
        let service = service.get();
        let result = ctx.with_storage(|s| catalog::place_order(s, &user_id, &service, &text, Utc::now()));
        ctx.report_write(&result, Some("Order placed successfully!"));
        set_details.set(String::new());
        ctx.load(TabLoader::Orders);
    };

    view! {
        <h2>"My Orders"</h2>
        <form class="order-form" on:submit=on_submit>
            <select on:change=move |ev| set_service.set(event_target_value(&ev))>
                {ServiceCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.slug()>{c.title()}</option> })
                    .collect_view()}
            </select>
            <textarea
                placeholder="Quantity, delivery place, phone number..."
                prop:value=move || details.get()
                on:input=move |ev| set_details.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Place order"</button>
        </form>

        {move || {
            let orders = store.orders().get();
            if orders.is_empty() {
                view! { <p class="empty-state">"You have not placed any orders yet."</p> }.into_any()
            } else {
                view! {
                    <ul class="order-list">
                        {orders
                            .into_iter()
                            .map(|order| {
                                let service = ServiceCategory::from_slug(&order.service)
                                    .map(|c| c.title().to_string())
                                    .unwrap_or(order.service);
                                view! {
                                    <li class="order">
                                        <strong>{service}</strong>
                                        <span class="order-status">{status_label(order.status)}</span>
                                        <p>{order.details}</p>
                                        <span class="order-time">
                                            {order.timestamp.format("%b %e, %Y %H:%M").to_string()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }
        }}

        <OwnerOrders />
    }
}

/// Every stored order, behind the owner password
#[component]
fn OwnerOrders() -> impl IntoView {
    let ctx = use_app_context();
    let unlocked = RwSignal::new(false);
    let (password, set_password) = signal(String::new());
    let all = RwSignal::new(Vec::<Order>::new());

    let refresh = move || match ctx.with_storage(|s| catalog::orders(s)) {
        Ok(list) => all.set(list),
        Err(e) => log::error!("Error retrieving orders: {}", e),
    };

    let on_unlock = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.with_storage(|s| catalog::verify_owner(s, &password.get())) {
            set_password.set(String::new());
            unlocked.set(true);
            refresh();
        } else {
            ctx.notify("Incorrect owner password", ToastKind::Error);
        }
    };

    let set_status = move |id: String, status: OrderStatus| {
        let result = ctx.with_storage(|s| catalog::set_order_status(s, &id, status));
        ctx.report_write(&result, None);
        refresh();
        ctx.load(TabLoader::Orders);
    };

    view! {
        <Show
            when=move || unlocked.get()
            fallback=move || {
                view! {
                    <form class="owner-login" on:submit=on_unlock>
                        <input
                            type="password"
                            placeholder="Owner password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="submit">"Manage orders"</button>
                    </form>
                }
            }
        >
            <h3>"All orders"</h3>
            <ul class="order-list owner-orders">
                {move || {
                    all.get()
                        .into_iter()
                        .map(|order| {
                            let complete_id = order.id.clone();
                            let cancel_id = order.id.clone();
                            view! {
                                <li class="order">
                                    <strong>{order.service}</strong>
                                    <span class="order-status">{status_label(order.status)}</span>
                                    <p>{order.details}</p>
                                    <button on:click=move |_| set_status(complete_id.clone(), OrderStatus::Completed)>
                                        "Complete"
                                    </button>
                                    <button on:click=move |_| set_status(cancel_id.clone(), OrderStatus::Cancelled)>
                                        "Cancel"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::Completed => "Completed",
        OrderStatus::Cancelled => "Cancelled",
    }
}
