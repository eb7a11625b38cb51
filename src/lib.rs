//! # calico-ui
//!
//! Leptos + WASM frontend for the Calico sign-in page.
//!
//! The crate renders the login and registration forms, calls the external
//! `/api/login` and `/api/register` endpoints, and remembers a "welcome
//! back" flag in `localStorage`. Browser glue sits behind the `csr` feature
//! so page logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
