//! # UI configuration
//!
//! Tunables of the page shell. All fields carry serde defaults, so a partial
//! JSON object (or none at all) yields the stock behaviour:
//!
//! | Field | Default | Used by |
//! |-------|---------|---------|
//! | `mobile_breakpoint_px` | 768 | tab selection closes the submenu at or below this width |
//! | `toast_fade_ms` | 3000 | toast starts fading |
//! | `toast_remove_ms` | 3300 | toast element is removed |
//! | `default_tab` | `"home"` | tab active on load |

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: f64,
    #[serde(default = "default_toast_fade")]
    pub toast_fade_ms: u32,
    #[serde(default = "default_toast_remove")]
    pub toast_remove_ms: u32,
    #[serde(default = "default_tab")]
    pub default_tab: String,
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_toast_fade() -> u32 {
    3000
}

fn default_toast_remove() -> u32 {
    3300
}

fn default_tab() -> String {
    "home".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
            toast_fade_ms: default_toast_fade(),
            toast_remove_ms: default_toast_remove(),
            default_tab: default_tab(),
        }
    }
}

impl UiConfig {
    /// Builder method to set the tab active on load.
    pub fn with_default_tab(mut self, tab: impl Into<String>) -> Self {
        self.default_tab = tab.into();
        self
    }

    /// Delay between the fade starting and the element being removed
    pub fn toast_fade_duration_ms(&self) -> u32 {
        self.toast_remove_ms.saturating_sub(self.toast_fade_ms)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
