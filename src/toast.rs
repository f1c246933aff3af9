//! Toast notifications
//!
//! Appends a transient element to `document.body`, fades it out and removes
//! it. Fire-and-forget; several toasts may stack.

use alfonce_core::{ToastKind, UiConfig};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn show_notification(message: &str, kind: ToastKind, config: &UiConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("div") else {
        return;
    };
    element.set_class_name(kind.class_name());
    element.set_text_content(Some(message));
    if body.append_child(&element).is_err() {
        return;
    }
    let Ok(toast) = element.dyn_into::<HtmlElement>() else {
        return;
    };

    let fade_duration = config.toast_fade_duration_ms();
    Timeout::new(config.toast_fade_ms, move || {
        let style = toast.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        Timeout::new(fade_duration, move || toast.remove()).forget();
    })
    .forget();
}
