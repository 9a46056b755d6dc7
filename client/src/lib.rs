//! # client
//!
//! Leptos + WASM storefront: catalog with search, basket page, and a
//! simulated phone sign-in. Cart rules live in the `basket` crate; this
//! crate wires them to browser storage and reactive views.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
