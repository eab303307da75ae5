//! # client
//!
//! Leptos + WASM frontend for the chunk-quality dashboard.
//!
//! This crate contains the page, components, client state models, chart
//! geometry helpers, and the REST helpers that talk to the `server` JSON API.
//! Wire records and pure derivations come from the shared `chunks` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
