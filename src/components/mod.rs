//! UI Components
//!
//! Tab bar and the panes it switches between.

mod tab_bar;
mod reaction_bar;
mod home_pane;
mod notifications_pane;
mod orders_pane;
mod other_services_pane;
mod developer_pane;

pub use tab_bar::{TabBar, TabPane};
pub use reaction_bar::ReactionBar;
pub use home_pane::HomePane;
pub use notifications_pane::NotificationsPane;
pub use orders_pane::OrdersPane;
pub use other_services_pane::{OtherServicesPane, ServiceCard};
pub use developer_pane::DeveloperPane;
