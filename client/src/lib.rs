//! # client
//!
//! Leptos frontend for the CallCenter Pro marketing site.
//!
//! This crate contains the six content pages, shared site chrome, page and
//! form state, the static copy every page renders, and the browser helpers
//! for theme persistence and scrolling. The `server` crate renders it with
//! SSR; the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
