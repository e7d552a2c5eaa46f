pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // Requests issued before this settles resolve the base URL themselves.
    leptos::spawn_local(config::init());

    router::mount_app();
}
