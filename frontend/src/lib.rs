use leptos::*;

pub mod api;
pub mod app;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use app::ClinicApp;

/// Installs logging, resolves runtime config in the background and mounts
/// the shell into `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting clinic login frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <ClinicApp/> });
}
