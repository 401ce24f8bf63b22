//! Entry point for the WASM application

use campus_admin::App;
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Campus Admin - Starting Leptos App (API: {})", campus_admin::API_URL);

    mount_to_body(|| view! { <App/> })
}
