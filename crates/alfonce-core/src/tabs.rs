//! Tab Controller
//!
//! One tab active at a time. Selecting a tab activates its `<name>-content`
//! pane, dispatches the tab's loader and, on narrow viewports, closes the
//! mobile submenu.

use crate::config::UiConfig;

/// Content loader attached to a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabLoader {
    Notifications,
    Orders,
    OtherServices,
    Developer,
}

impl TabLoader {
    /// Loader for a `data-tab` name; other tabs have none
    pub fn for_tab(name: &str) -> Option<Self> {
        match name {
            "notifications" => Some(TabLoader::Notifications),
            "orders" => Some(TabLoader::Orders),
            "other-services" => Some(TabLoader::OtherServices),
            "developer" => Some(TabLoader::Developer),
            _ => None,
        }
    }
}

/// Outcome of selecting a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTransition {
    pub tab: String,
    /// Element id of the pane to show
    pub content_id: String,
    pub loader: Option<TabLoader>,
    /// Mobile submenu should be closed
    pub close_menu: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabController {
    tabs: Vec<String>,
    active: Option<String>,
    menu_open: bool,
    mobile_breakpoint_px: f64,
}

impl TabController {
    /// Register `tabs`; `config.default_tab` starts active when registered.
    pub fn new<I, S>(tabs: I, config: &UiConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        let active = tabs.iter().find(|t| **t == config.default_tab).cloned();
        Self {
            tabs,
            active,
            menu_open: false,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Pane id for a tab name
    pub fn content_id(name: &str) -> String {
        format!("{}-content", name)
    }

    /// Activate `name`. Unregistered names leave the state untouched.
    pub fn select(&mut self, name: &str, viewport_width: f64) -> Option<TabTransition> {
        if !self.tabs.iter().any(|t| t == name) {
            log::warn!("Ignoring unknown tab `{}`", name);
            return None;
        }

        self.active = Some(name.to_string());

        let close_menu = viewport_width <= self.mobile_breakpoint_px;
        if close_menu {
            self.menu_open = false;
        }

        Some(TabTransition {
            tab: name.to_string(),
            content_id: Self::content_id(name),
            loader: TabLoader::for_tab(name),
            close_menu,
        })
    }

    /// Select `name` and run its loader, if any, once.
    pub fn click(
        &mut self,
        name: &str,
        viewport_width: f64,
        mut on_load: impl FnMut(TabLoader),
    ) -> Option<TabTransition> {
        let transition = self.select(name, viewport_width)?;
        if let Some(loader) = transition.loader {
            on_load(loader);
        }
        Some(transition)
    }

    /// Flip the mobile submenu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}
