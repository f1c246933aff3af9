//! Default data tests against in-memory and failing backends.

use chrono::{Duration, TimeZone};
use serde_json::json;

use super::*;
use crate::backend::testing::FlakyBackend;
use crate::backend::MemoryBackend;

fn ctx() -> SeedContext {
    SeedContext::new(Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap(), 0.5)
}

fn snapshot(backend: &MemoryBackend, keys: &[String]) -> Vec<Option<String>> {
    keys.iter().map(|k| backend.get(k).unwrap()).collect()
}

fn all_keys() -> Vec<String> {
    let mut names: Vec<String> = [
        keys::SESSION_ID,
        keys::ADMIN_CREDENTIALS,
        keys::OWNER_PASSWORD,
        keys::SLIDESHOW_TEXT,
        keys::NOTIFICATIONS,
        keys::ORDERS,
        keys::OTHER_SERVICES,
        keys::DEVELOPER_CODE,
    ]
    .iter()
    .map(|k| k.to_string())
    .collect();
    names.extend((0..keys::SLIDESHOW_SLOTS).map(keys::slideshow_image));
    names.extend(ServiceCategory::ALL.iter().map(|c| c.images_key()));
    names
}

#[test]
fn test_fresh_environment() {
    let storage = StorageService::new(MemoryBackend::new());

    let report = initialize_default_data(&storage, &ctx());

    assert!(report.is_clean());
    assert_eq!(report.seeded.len(), 8 + SEEDED_SLIDES + ServiceCategory::ALL.len());
    assert_eq!(storage.get_value(keys::ORDERS).unwrap(), Some(json!([])));
    assert_eq!(
        storage.get_item::<String>(keys::OWNER_PASSWORD).unwrap(),
        Some("owner123".to_string())
    );
    assert_eq!(
        storage.get_value(keys::ADMIN_CREDENTIALS).unwrap(),
        Some(json!({"username": "Astra", "password": "@Astra123"}))
    );
    assert_eq!(
        storage.get_item::<String>(keys::SESSION_ID).unwrap(),
        Some("user_1792315800000_i000000".to_string())
    );
}

#[test]
fn test_initializer_is_idempotent() {
    let backend = MemoryBackend::new();
    let storage = StorageService::new(&backend);
    let keys = all_keys();

    initialize_default_data(&storage, &ctx());
    let once = snapshot(&backend, &keys);

    let later = SeedContext::new(ctx().now + Duration::hours(1), 0.9);
    let report = initialize_default_data(&storage, &later);
    let twice = snapshot(&backend, &keys);

    assert!(report.seeded.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_existing_values_are_kept() {
    let storage = StorageService::new(MemoryBackend::new());
    storage.set_item(keys::OWNER_PASSWORD, "changed").unwrap();
    storage.set_item(keys::ORDERS, &json!([{"id": "o1"}])).unwrap();

    let report = initialize_default_data(&storage, &ctx());

    assert!(!report.seeded.contains(&keys::OWNER_PASSWORD.to_string()));
    assert_eq!(
        storage.get_item::<String>(keys::OWNER_PASSWORD).unwrap(),
        Some("changed".to_string())
    );
    assert_eq!(storage.get_value(keys::ORDERS).unwrap(), Some(json!([{"id": "o1"}])));
}

#[test]
fn test_falsy_values_are_reseeded() {
    let backend = MemoryBackend::new();
    backend.set(keys::OWNER_PASSWORD, r#""""#).unwrap();
    backend.set(keys::SLIDESHOW_TEXT, "false").unwrap();
    backend.set(keys::DEVELOPER_CODE, "0").unwrap();
    backend.set(keys::SESSION_ID, "null").unwrap();
    backend.set(keys::ORDERS, "[]").unwrap();
    let storage = StorageService::new(&backend);

    let report = initialize_default_data(&storage, &ctx());

    for key in [keys::OWNER_PASSWORD, keys::SLIDESHOW_TEXT, keys::DEVELOPER_CODE, keys::SESSION_ID] {
        assert!(report.seeded.contains(&key.to_string()), "{} not reseeded", key);
    }
    assert!(!report.seeded.contains(&keys::ORDERS.to_string()));
    assert_eq!(
        storage.get_item::<String>(keys::OWNER_PASSWORD).unwrap(),
        Some("owner123".to_string())
    );
    assert_eq!(
        storage.get_item::<String>(keys::SLIDESHOW_TEXT).unwrap().as_deref(),
        Some(DEFAULT_SLIDESHOW_TEXT)
    );
}

#[test]
fn test_only_first_three_slides_seeded() {
    let storage = StorageService::new(MemoryBackend::new());
    initialize_default_data(&storage, &ctx());

    assert_eq!(
        storage.get_item::<ServiceImage>("slideshowImage2").unwrap(),
        Some(ServiceImage::new("https://picsum.photos/id/3/800/400", "slide2"))
    );
    for slot in SEEDED_SLIDES..keys::SLIDESHOW_SLOTS {
        assert!(!storage.contains_key(&keys::slideshow_image(slot)));
    }
}

#[test]
fn test_category_images() {
    let routers = default_category_images(ServiceCategory::Routers);
    assert_eq!(routers.len(), IMAGES_PER_CATEGORY);
    assert_eq!(routers[0], ServiceImage::new("https://picsum.photos/id/51/450/450", "routers-1"));
    assert_eq!(routers[4].url, "https://picsum.photos/id/55/450/450");

    let boards = default_category_images(ServiceCategory::DrawingBoards);
    assert_eq!(boards[0].url, "https://picsum.photos/id/31/450/450");

    let papers = default_category_images(ServiceCategory::Papers);
    assert_eq!(papers[4], ServiceImage::new("https://picsum.photos/id/85/450/450", "papers-5"));
}

#[test]
fn test_seeded_records_decode() {
    let storage = StorageService::new(MemoryBackend::new());
    initialize_default_data(&storage, &ctx());

    let notifications: Vec<Notification> = storage.get_item(keys::NOTIFICATIONS).unwrap().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, "notif1");
    assert_eq!(notifications[0].timestamp, ctx().now);

    let services: Vec<OtherService> = storage.get_item(keys::OTHER_SERVICES).unwrap().unwrap();
    assert_eq!(services[0].id, "service1");
    assert!(!services[0].show_on_main_page);
    assert_eq!(services[0].item_lines().len(), 4);

    assert_eq!(
        storage.get_item::<String>(keys::DEVELOPER_CODE).unwrap().as_deref(),
        Some(DEFAULT_DEVELOPER_CODE)
    );
}

#[test]
fn test_failing_backend_reports_every_write() {
    let storage = StorageService::new(FlakyBackend::failing_writes());

    let report = initialize_default_data(&storage, &ctx());

    assert!(!report.is_clean());
    assert_eq!(report.failures.len(), report.seeded.len());
    assert!(report.failures.iter().all(StorageError::is_persistence_failure));

    // Session-only copies still serve reads
    assert_eq!(storage.get_value(keys::ORDERS).unwrap(), Some(json!([])));

    // And a second run within the session finds them
    let again = initialize_default_data(&storage, &ctx());
    assert!(again.seeded.is_empty());
    assert!(again.is_clean());
}
