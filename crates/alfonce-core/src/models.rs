//! Records stored under the page's keys.
//!
//! Field names serialize in camelCase to stay compatible with blobs already
//! sitting in a visitor's local storage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Admin login, stored in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// An image in the slideshow or a category gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceImage {
    pub url: String,
    pub id: String,
}

impl ServiceImage {
    pub fn new(url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            id: id.into(),
        }
    }
}

/// Comment on a notification or service.
///
/// Fields this page does not know about are kept in `extra` so rewriting a
/// list never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Reaction counts plus the reaction each session picked.
///
/// Every user holds at most one reaction; `counts` is kept consistent with
/// `by_user` by [`Reactable::toggle_reaction`].
pub trait Reactable {
    fn reactions_mut(&mut self) -> (&mut BTreeMap<String, u32>, &mut BTreeMap<String, String>);

    /// Apply `reaction` for `user_id`. Same reaction again withdraws it;
    /// a different one replaces the previous. Returns the user's reaction now.
    fn toggle_reaction(&mut self, user_id: &str, reaction: &str) -> Option<String> {
        let (counts, by_user) = self.reactions_mut();

        let previous = by_user.remove(user_id);
        if let Some(prev) = &previous {
            if let Some(count) = counts.get_mut(prev) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    counts.remove(prev);
                }
            }
        }

        if previous.as_deref() == Some(reaction) {
            return None;
        }

        *counts.entry(reaction.to_string()).or_insert(0) += 1;
        by_user.insert(user_id.to_string(), reaction.to_string());
        Some(reaction.to_string())
    }
}

/// Announcement shown in the notifications tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: BTreeMap<String, u32>,
    #[serde(default)]
    pub user_reactions: BTreeMap<String, String>,
}

impl Notification {
    pub fn new(id: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            timestamp,
            comments: Vec::new(),
            reactions: BTreeMap::new(),
            user_reactions: BTreeMap::new(),
        }
    }
}

impl Reactable for Notification {
    fn reactions_mut(&mut self) -> (&mut BTreeMap<String, u32>, &mut BTreeMap<String, String>) {
        (&mut self.reactions, &mut self.user_reactions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// Order placed from the orders tab; unknown fields survive in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    /// Category slug or other-service id the order is for
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// Free-form service offering outside the fixed categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherService {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub media_type: MediaType,
    pub media_url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub reactions: BTreeMap<String, u32>,
    #[serde(default)]
    pub user_reactions: BTreeMap<String, String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Bullet list, one `▪`-prefixed entry per line
    #[serde(default)]
    pub items: String,
    #[serde(default)]
    pub show_on_main_page: bool,
}

impl OtherService {
    /// Entries of [`Self::items`] without their bullet markers
    pub fn item_lines(&self) -> Vec<&str> {
        self.items
            .lines()
            .map(|line| line.trim_start_matches('▪').trim())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl Reactable for OtherService {
    fn reactions_mut(&mut self) -> (&mut BTreeMap<String, u32>, &mut BTreeMap<String, String>) {
        (&mut self.reactions, &mut self.user_reactions)
    }
}
