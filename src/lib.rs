//! # chart-sheet-ui
//!
//! Leptos components for a proportional bar chart and slide-out sheet
//! panels, plus a small dashboard page that composes them.
//!
//! The layout math and class merging are plain Rust in `util` and can be
//! used without a rendering runtime.

pub mod app;
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
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
