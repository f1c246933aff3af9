//! Catalog tests on seeded in-memory storage.

use chrono::{Duration, TimeZone};

use super::*;
use crate::backend::testing::FlakyBackend;
use crate::backend::{MemoryBackend, PersistenceBackend};
use crate::seed::{initialize_default_data, SeedContext};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
}

fn seeded() -> StorageService<MemoryBackend> {
    let storage = StorageService::new(MemoryBackend::new());
    initialize_default_data(&storage, &SeedContext::new(now(), 0.5));
    storage
}

#[test]
fn test_slideshow_skips_empty_slots() {
    let storage = seeded();
    set_slideshow_image(&storage, 5, &ServiceImage::new("https://example.com/5.jpg", "slide5")).unwrap();

    let slots: Vec<usize> = slideshow_images(&storage).into_iter().map(|(slot, _)| slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 5]);
    assert_eq!(slideshow_text(&storage), "Best university products and services in UDOM");

    assert!(matches!(
        set_slideshow_image(&storage, 7, &ServiceImage::new("x", "y")),
        Err(StorageError::InvalidSlot(7))
    ));
}

#[test]
fn test_category_images_of_empty_storage() {
    let storage = StorageService::new(MemoryBackend::new());
    assert!(category_images(&storage, ServiceCategory::SimCards).unwrap().is_empty());

    let storage = seeded();
    assert_eq!(category_images(&storage, ServiceCategory::SimCards).unwrap().len(), 5);
}

#[test]
fn test_notification_reactions_persist() {
    let storage = seeded();

    let mine = react_to_notification(&storage, "notif1", "user_a", "like").unwrap();
    assert_eq!(mine, Some("like".to_string()));
    react_to_notification(&storage, "notif1", "user_b", "like").unwrap();

    let list = notifications(&storage).unwrap();
    assert_eq!(list[0].reactions.get("like"), Some(&2));

    assert_eq!(react_to_notification(&storage, "notif1", "user_a", "like").unwrap(), None);
    assert_eq!(notifications(&storage).unwrap()[0].reactions.get("like"), Some(&1));
}

#[test]
fn test_unknown_notification() {
    let storage = seeded();
    let err = react_to_notification(&storage, "nope", "user_a", "like").unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[test]
fn test_comment_on_notification() {
    let storage = seeded();

    let first = comment_on_notification(&storage, "notif1", "user_a", "  Do you deliver?  ", now()).unwrap();
    let second = comment_on_notification(&storage, "notif1", "user_b", "Yes", now()).unwrap();

    assert_eq!(first.id, "notif1-c1");
    assert_eq!(first.text, "Do you deliver?");
    assert_eq!(second.id, "notif1-c2");
    assert_eq!(notifications(&storage).unwrap()[0].comments, vec![first, second]);
}

#[test]
fn test_notifications_newest_first() {
    let storage = seeded();
    storage
        .update_list(keys::NOTIFICATIONS, |list: &mut Vec<Notification>| {
            list.push(Notification::new("notif2", "New stock", now() + Duration::days(1)));
        })
        .unwrap();

    let ids: Vec<String> = notifications(&storage).unwrap().into_iter().map(|n| n.id).collect();
    assert_eq!(ids, vec!["notif2", "notif1"]);
}

#[test]
fn test_place_order() {
    let storage = seeded();

    let order = place_order(&storage, "user_a", "routers", " Two routers ", now()).unwrap();
    place_order(&storage, "user_b", "papers", "A4 ream", now()).unwrap();

    assert_eq!(order.id, "order_1792315800000_1");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.details, "Two routers");
    assert_eq!(orders(&storage).unwrap().len(), 2);
    assert_eq!(orders_for_user(&storage, "user_a").unwrap(), vec![order.clone()]);

    set_order_status(&storage, &order.id, OrderStatus::Completed).unwrap();
    assert_eq!(orders_for_user(&storage, "user_a").unwrap()[0].status, OrderStatus::Completed);
}

#[test]
fn test_place_order_without_persistence() {
    let storage = StorageService::new(FlakyBackend::failing_writes());

    let err = place_order(&storage, "user_a", "routers", "one", now()).unwrap_err();
    assert!(err.is_persistence_failure());
    assert_eq!(orders(&storage).unwrap().len(), 1);
}

#[test]
fn test_place_order_keeps_legacy_orders() {
    let backend = MemoryBackend::new();
    backend
        .set(
            keys::ORDERS,
            r#"[{"id":"o1","service":"routers","quantity":2,"timestamp":"2026-10-01T08:00:00Z"}]"#,
        )
        .unwrap();
    let storage = StorageService::new(&backend);

    place_order(&storage, "user_a", "papers", "A4 ream", now()).unwrap();

    let stored: Vec<serde_json::Value> = serde_json::from_str(&backend.get(keys::ORDERS).unwrap().unwrap()).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["id"], "o1");
    assert_eq!(stored[0]["quantity"], 2);
    assert_eq!(stored[1]["service"], "papers");
}

#[test]
fn test_undecodable_orders_are_not_overwritten() {
    let legacy = r#"[{"id":"o1","service":"routers","status":"shipped"}]"#;
    let backend = MemoryBackend::new();
    backend.set(keys::ORDERS, legacy).unwrap();
    let storage = StorageService::new(&backend);

    assert!(matches!(orders(&storage), Err(StorageError::Decode { .. })));
    assert!(matches!(
        place_order(&storage, "user_a", "papers", "A4 ream", now()),
        Err(StorageError::Decode { .. })
    ));
    assert!(matches!(
        set_order_status(&storage, "o1", OrderStatus::Completed),
        Err(StorageError::Decode { .. })
    ));
    assert_eq!(backend.get(keys::ORDERS).unwrap(), Some(legacy.to_string()));
}

#[test]
fn test_notifications_with_legacy_comments() {
    let backend = MemoryBackend::new();
    backend
        .set(
            keys::NOTIFICATIONS,
            r#"[{"id":"notif1","message":"Hi","timestamp":"2026-10-01T08:00:00Z","comments":[{"text":"Nice"}]}]"#,
        )
        .unwrap();
    let storage = StorageService::new(&backend);

    let list = notifications(&storage).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].comments[0].text, "Nice");

    let comment = comment_on_notification(&storage, "notif1", "user_a", "Me too", now()).unwrap();
    assert_eq!(comment.id, "notif1-c2");
    assert_eq!(notifications(&storage).unwrap()[0].comments.len(), 2);
}

#[test]
fn test_undecodable_notifications_are_reported() {
    let backend = MemoryBackend::new();
    backend.set(keys::NOTIFICATIONS, r#"[{"message":"no id"}]"#).unwrap();
    let storage = StorageService::new(&backend);

    assert!(matches!(notifications(&storage), Err(StorageError::Decode { .. })));
    assert!(matches!(
        react_to_notification(&storage, "notif1", "user_a", "like"),
        Err(StorageError::Decode { .. })
    ));
}

#[test]
fn test_featured_services() {
    let storage = seeded();
    assert!(featured_services(&storage).unwrap().is_empty());

    storage
        .update_list(keys::OTHER_SERVICES, |list: &mut Vec<OtherService>| {
            list[0].show_on_main_page = true;
        })
        .unwrap();

    let featured = featured_services(&storage).unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].title, "Custom Printing Services");

    react_to_service(&storage, "service1", "user_a", "love").unwrap();
    assert_eq!(other_services(&storage).unwrap()[0].reactions.get("love"), Some(&1));
}

#[test]
fn test_developer_code() {
    let storage = seeded();
    assert!(developer_code(&storage).starts_with("<h1>Welcome to ALFONCE SERVICES</h1>"));

    save_developer_code(&storage, "<p>custom</p>").unwrap();
    assert_eq!(developer_code(&storage), "<p>custom</p>");
}

#[test]
fn test_credentials() {
    let storage = seeded();
    assert!(verify_admin(&storage, "Astra", "@Astra123"));
    assert!(!verify_admin(&storage, "Astra", "wrong"));
    assert!(verify_owner(&storage, "owner123"));

    storage.set_item(keys::OWNER_PASSWORD, "changed").unwrap();
    assert!(!verify_owner(&storage, "owner123"));
    assert!(verify_owner(&storage, "changed"));
}
