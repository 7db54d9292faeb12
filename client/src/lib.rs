//! # client
//!
//! Leptos + WASM frontend for the admin portal.
//!
//! This crate contains the pages, the route guard, the session store that
//! holds the bearer token, and the REST client that talks to the admin API.
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`); browser-only behavior is gated on the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
