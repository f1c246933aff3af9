//! ALFONCE SERVICES Frontend Entry Point

mod context;
mod store;
mod toast;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
