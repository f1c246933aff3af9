//! Storage keys
//!
//! Flat namespace shared with the page's local storage.

use serde::{Deserialize, Serialize};

pub const SESSION_ID: &str = "sessionId";
pub const ADMIN_CREDENTIALS: &str = "adminCredentials";
pub const OWNER_PASSWORD: &str = "ownerPassword";
pub const SLIDESHOW_TEXT: &str = "slideshowText";
pub const NOTIFICATIONS: &str = "notifications";
pub const ORDERS: &str = "orders";
pub const OTHER_SERVICES: &str = "otherServices";
pub const DEVELOPER_CODE: &str = "developerCode";

/// Number of slideshow slots (`slideshowImage0` .. `slideshowImage6`)
pub const SLIDESHOW_SLOTS: usize = 7;

/// Key of one slideshow slot
pub fn slideshow_image(slot: usize) -> String {
    format!("slideshowImage{}", slot)
}

/// Fixed service catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    DrawingBoards,
    MathematicalSet,
    Routers,
    SimCards,
    SmeBundles,
    Papers,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::DrawingBoards,
        ServiceCategory::MathematicalSet,
        ServiceCategory::Routers,
        ServiceCategory::SimCards,
        ServiceCategory::SmeBundles,
        ServiceCategory::Papers,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ServiceCategory::DrawingBoards => "drawing-boards",
            ServiceCategory::MathematicalSet => "mathematical-set",
            ServiceCategory::Routers => "routers",
            ServiceCategory::SimCards => "sim-cards",
            ServiceCategory::SmeBundles => "sme-bundles",
            ServiceCategory::Papers => "papers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceCategory::DrawingBoards => "Drawing Boards",
            ServiceCategory::MathematicalSet => "Mathematical Sets",
            ServiceCategory::Routers => "Routers",
            ServiceCategory::SimCards => "SIM Cards",
            ServiceCategory::SmeBundles => "SME Bundles",
            ServiceCategory::Papers => "Papers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Position in [`Self::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Storage key of this category's gallery, e.g. `routersImages`
    pub fn images_key(self) -> String {
        format!("{}Images", self.slug())
    }
}
