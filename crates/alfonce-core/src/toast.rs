//! Toast notification model.
//!
//! Rendering lives in the frontend; this only fixes the css contract.

/// Success or error flavour of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// Full class attribute of the toast element
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "notification-toast notification-success",
            ToastKind::Error => "notification-toast notification-error",
        }
    }
}

/// Shown whenever a write could not be persisted
pub const SAVE_FAILED_MESSAGE: &str = "Error saving data. Please try again.";
