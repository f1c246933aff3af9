//! Catalog Operations
//!
//! Typed reads and edits of the records the page shows. Each edit is a
//! read-modify-write of one key; the page is single-threaded so nothing
//! else interleaves.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::PersistenceBackend;
use crate::error::{StorageError, StorageResult};
use crate::keys::{self, ServiceCategory};
use crate::models::{
    AdminCredentials, Comment, Notification, Order, OrderStatus, OtherService, Reactable, ServiceImage,
};
use crate::seed;
use crate::storage::StorageService;

// ========================
// Slideshow & galleries
// ========================

pub fn slideshow_text<B: PersistenceBackend>(storage: &StorageService<B>) -> String {
    storage
        .get_item::<String>(keys::SLIDESHOW_TEXT)
        .ok()
        .flatten()
        .unwrap_or_else(|| seed::DEFAULT_SLIDESHOW_TEXT.to_string())
}

/// Filled slideshow slots with their slot index. Empty or unreadable slots are skipped.
pub fn slideshow_images<B: PersistenceBackend>(storage: &StorageService<B>) -> Vec<(usize, ServiceImage)> {
    (0..keys::SLIDESHOW_SLOTS)
        .filter_map(|slot| {
            storage
                .get_item::<ServiceImage>(&keys::slideshow_image(slot))
                .ok()
                .flatten()
                .map(|image| (slot, image))
        })
        .collect()
}

pub fn set_slideshow_image<B: PersistenceBackend>(
    storage: &StorageService<B>,
    slot: usize,
    image: &ServiceImage,
) -> StorageResult<()> {
    if slot >= keys::SLIDESHOW_SLOTS {
        return Err(StorageError::InvalidSlot(slot));
    }
    storage.set_item(&keys::slideshow_image(slot), image)
}

pub fn category_images<B: PersistenceBackend>(
    storage: &StorageService<B>,
    category: ServiceCategory,
) -> StorageResult<Vec<ServiceImage>> {
    Ok(storage.get_item(&category.images_key())?.unwrap_or_default())
}

// ========================
// Notifications
// ========================

/// Notifications, newest first
pub fn notifications<B: PersistenceBackend>(storage: &StorageService<B>) -> StorageResult<Vec<Notification>> {
    let mut list: Vec<Notification> = storage.load_item(keys::NOTIFICATIONS)?.unwrap_or_default();
    list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(list)
}

pub fn react_to_notification<B: PersistenceBackend>(
    storage: &StorageService<B>,
    notification_id: &str,
    user_id: &str,
    reaction: &str,
) -> StorageResult<Option<String>> {
    modify_record(storage, keys::NOTIFICATIONS, notification_id, |n: &Notification| &n.id, |n| {
        n.toggle_reaction(user_id, reaction)
    })
}

pub fn comment_on_notification<B: PersistenceBackend>(
    storage: &StorageService<B>,
    notification_id: &str,
    user_id: &str,
    text: &str,
    now: DateTime<Utc>,
) -> StorageResult<Comment> {
    modify_record(storage, keys::NOTIFICATIONS, notification_id, |n: &Notification| &n.id, |n| {
        let comment = Comment {
            id: format!("{}-c{}", n.id, n.comments.len() + 1),
            user_id: user_id.to_string(),
            text: text.trim().to_string(),
            timestamp: now,
            extra: Default::default(),
        };
        n.comments.push(comment.clone());
        comment
    })
}

// ========================
// Orders
// ========================

pub fn orders<B: PersistenceBackend>(storage: &StorageService<B>) -> StorageResult<Vec<Order>> {
    Ok(storage.load_item(keys::ORDERS)?.unwrap_or_default())
}

/// Orders placed from this browser session
pub fn orders_for_user<B: PersistenceBackend>(
    storage: &StorageService<B>,
    user_id: &str,
) -> StorageResult<Vec<Order>> {
    let mut list = orders(storage)?;
    list.retain(|o| o.user_id == user_id);
    Ok(list)
}

/// Append a pending order. On a backend failure the order still exists
/// for this session and the error is returned. Stored orders that do not
/// decode are never overwritten.
pub fn place_order<B: PersistenceBackend>(
    storage: &StorageService<B>,
    user_id: &str,
    service: &str,
    details: &str,
    now: DateTime<Utc>,
) -> StorageResult<Order> {
    let mut list = orders(storage)?;
    let order = Order {
        id: format!("order_{}_{}", now.timestamp_millis(), list.len() + 1),
        user_id: user_id.to_string(),
        service: service.to_string(),
        details: details.trim().to_string(),
        status: OrderStatus::Pending,
        timestamp: now,
        extra: Default::default(),
    };
    list.push(order.clone());
    storage.set_item(keys::ORDERS, &list)?;
    log::info!("Order {} placed for {}", order.id, order.service);
    Ok(order)
}

pub fn set_order_status<B: PersistenceBackend>(
    storage: &StorageService<B>,
    order_id: &str,
    status: OrderStatus,
) -> StorageResult<()> {
    modify_record(storage, keys::ORDERS, order_id, |o: &Order| &o.id, |o| o.status = status)
}

// ========================
// Other services
// ========================

pub fn other_services<B: PersistenceBackend>(storage: &StorageService<B>) -> StorageResult<Vec<OtherService>> {
    Ok(storage.load_item(keys::OTHER_SERVICES)?.unwrap_or_default())
}

/// Services flagged for the main page
pub fn featured_services<B: PersistenceBackend>(storage: &StorageService<B>) -> StorageResult<Vec<OtherService>> {
    let mut list = other_services(storage)?;
    list.retain(|s| s.show_on_main_page);
    Ok(list)
}

pub fn react_to_service<B: PersistenceBackend>(
    storage: &StorageService<B>,
    service_id: &str,
    user_id: &str,
    reaction: &str,
) -> StorageResult<Option<String>> {
    modify_record(storage, keys::OTHER_SERVICES, service_id, |s: &OtherService| &s.id, |s| {
        s.toggle_reaction(user_id, reaction)
    })
}

// ========================
// Developer tab
// ========================

pub fn developer_code<B: PersistenceBackend>(storage: &StorageService<B>) -> String {
    storage
        .get_item::<String>(keys::DEVELOPER_CODE)
        .ok()
        .flatten()
        .unwrap_or_default()
}

pub fn save_developer_code<B: PersistenceBackend>(storage: &StorageService<B>, html: &str) -> StorageResult<()> {
    storage.set_item(keys::DEVELOPER_CODE, html)
}

// ========================
// Credentials
// ========================

/// Plaintext comparison against the stored admin login.
pub fn verify_admin<B: PersistenceBackend>(storage: &StorageService<B>, username: &str, password: &str) -> bool {
    let stored = storage
        .get_item::<AdminCredentials>(keys::ADMIN_CREDENTIALS)
        .ok()
        .flatten()
        .unwrap_or_else(seed::default_admin_credentials);
    stored.username == username && stored.password == password
}

/// Plaintext comparison against the stored owner password.
pub fn verify_owner<B: PersistenceBackend>(storage: &StorageService<B>, password: &str) -> bool {
    let stored = storage
        .get_item::<String>(keys::OWNER_PASSWORD)
        .ok()
        .flatten()
        .unwrap_or_else(|| seed::DEFAULT_OWNER_PASSWORD.to_string());
    stored == password
}

/// Apply `f` to the record with `id` in the list under `key` and write the
/// list back. Nothing is written when the id is unknown or the stored list
/// does not decode.
fn modify_record<B, T, R>(
    storage: &StorageService<B>,
    key: &str,
    id: &str,
    id_of: impl Fn(&T) -> &String,
    f: impl FnOnce(&mut T) -> R,
) -> StorageResult<R>
where
    B: PersistenceBackend,
    T: Serialize + DeserializeOwned,
{
    let mut list: Vec<T> = storage.load_item(key)?.unwrap_or_default();
    let record = list
        .iter_mut()
        .find(|r| id_of(r) == id)
        .ok_or_else(|| StorageError::NotFound(format!("{} in {}", id, key)))?;
    let out = f(record);
    storage.set_item(key, &list)?;
    Ok(out)
}

#[cfg(test)]
mod tests;
