//! Default Data
//!
//! Seeds the demo content of a fresh browser. Every key is checked on its
//! own and only written when absent, so this runs on every page load.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::backend::PersistenceBackend;
use crate::error::StorageError;
use crate::keys::{self, ServiceCategory};
use crate::models::{AdminCredentials, MediaType, Notification, Order, OtherService, ServiceImage};
use crate::session;
use crate::storage::StorageService;

/// Images per category gallery
pub const IMAGES_PER_CATEGORY: usize = 5;
/// Slideshow slots filled on first run
pub const SEEDED_SLIDES: usize = 3;

pub const WELCOME_MESSAGE: &str =
    "Welcome to ALFONCE SERVICES! We offer a wide range of university products and services.";
pub const DEFAULT_SLIDESHOW_TEXT: &str = "Best university products and services in UDOM";
pub const DEFAULT_OWNER_PASSWORD: &str = "owner123";
pub const DEFAULT_DEVELOPER_CODE: &str =
    "<h1>Welcome to ALFONCE SERVICES</h1>\n<p>This is a sample HTML code.</p>";

/// Clock and randomness used while seeding
#[derive(Debug, Clone, Copy)]
pub struct SeedContext {
    pub now: DateTime<Utc>,
    /// Uniform value in `[0, 1)` for the session id suffix
    pub entropy: f64,
}

impl SeedContext {
    pub fn new(now: DateTime<Utc>, entropy: f64) -> Self {
        Self { now, entropy }
    }
}

/// What one initializer run did
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Keys written by this run
    pub seeded: Vec<String>,
    /// Writes that only reached the memory copy
    pub failures: Vec<StorageError>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write every missing default key.
pub fn initialize_default_data<B: PersistenceBackend>(
    storage: &StorageService<B>,
    ctx: &SeedContext,
) -> SeedReport {
    let mut report = SeedReport::default();

    if !is_set(storage, keys::SESSION_ID) {
        record(
            &mut report,
            keys::SESSION_ID,
            session::ensure_session_id(storage, ctx.now.timestamp_millis(), ctx.entropy).map(|_| ()),
        );
    }

    seed(storage, &mut report, keys::ADMIN_CREDENTIALS, default_admin_credentials);
    seed(storage, &mut report, keys::OWNER_PASSWORD, || DEFAULT_OWNER_PASSWORD);
    seed(storage, &mut report, keys::SLIDESHOW_TEXT, || DEFAULT_SLIDESHOW_TEXT);

    for slot in 0..SEEDED_SLIDES {
        seed(storage, &mut report, &keys::slideshow_image(slot), || default_slide(slot));
    }

    for category in ServiceCategory::ALL {
        seed(storage, &mut report, &category.images_key(), || default_category_images(category));
    }

    seed(storage, &mut report, keys::NOTIFICATIONS, || default_notifications(ctx.now));
    seed(storage, &mut report, keys::ORDERS, Vec::<Order>::new);
    seed(storage, &mut report, keys::OTHER_SERVICES, || default_other_services(ctx.now));
    seed(storage, &mut report, keys::DEVELOPER_CODE, || DEFAULT_DEVELOPER_CODE);

    if !report.seeded.is_empty() {
        log::info!("Seeded default data: {}", report.seeded.join(", "));
    }
    report
}

fn seed<B, T, F>(storage: &StorageService<B>, report: &mut SeedReport, key: &str, value: F)
where
    B: PersistenceBackend,
    T: Serialize,
    F: FnOnce() -> T,
{
    if is_set(storage, key) {
        return;
    }
    record(report, key, storage.set_item(key, &value()));
}

/// A key counts as set when it holds a truthy value. `null`, `false`, `0`
/// and `""` are re-seeded, matching how the page has always checked.
fn is_set<B: PersistenceBackend>(storage: &StorageService<B>, key: &str) -> bool {
    match storage.get_value(key) {
        Ok(Some(Value::Null | Value::Bool(false))) | Ok(None) | Err(_) => false,
        Ok(Some(Value::Number(n))) => n.as_f64().is_some_and(|n| n != 0.0),
        Ok(Some(Value::String(s))) => !s.is_empty(),
        Ok(Some(_)) => true,
    }
}

fn record(report: &mut SeedReport, key: &str, result: Result<(), StorageError>) {
    match result {
        Ok(()) => report.seeded.push(key.to_string()),
        Err(e) => {
            // Serialization failures never reached memory
            if e.is_persistence_failure() {
                report.seeded.push(key.to_string());
            }
            report.failures.push(e);
        }
    }
}

pub fn default_admin_credentials() -> AdminCredentials {
    AdminCredentials {
        username: "Astra".to_string(),
        password: "@Astra123".to_string(),
    }
}

pub fn default_slide(slot: usize) -> ServiceImage {
    ServiceImage::new(
        format!("https://picsum.photos/id/{}/800/400", slot + 1),
        format!("slide{}", slot),
    )
}

pub fn default_category_images(category: ServiceCategory) -> Vec<ServiceImage> {
    (1..=IMAGES_PER_CATEGORY)
        .map(|n| {
            let seed = category.index() * 10 + n;
            ServiceImage::new(
                format!("https://picsum.photos/id/{}/450/450", seed + 30),
                format!("{}-{}", category.slug(), n),
            )
        })
        .collect()
}

pub fn default_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![Notification::new("notif1", WELCOME_MESSAGE, now)]
}

pub fn default_other_services(now: DateTime<Utc>) -> Vec<OtherService> {
    vec![OtherService {
        id: "service1".to_string(),
        title: "Custom Printing Services".to_string(),
        description: "We offer custom printing services for all your academic needs.".to_string(),
        media_type: MediaType::Image,
        media_url: "https://picsum.photos/id/60/800/450".to_string(),
        timestamp: now,
        reactions: Default::default(),
        user_reactions: Default::default(),
        comments: Vec::new(),
        items: "▪Printing\n▪Scanning\n▪Photocopying\n▪Binding".to_string(),
        show_on_main_page: false,
    }]
}

#[cfg(test)]
mod tests;
