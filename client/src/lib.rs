//! # client
//!
//! Leptos + WASM frontend for the TrendShop storefront.
//!
//! This crate contains pages, components, screen state, and the REST client
//! for the storefront backend. The session token itself is owned by the
//! framework-free `session` crate; `state::session` mirrors it into the
//! reactive graph and `components::require_auth` guards protected routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("client: hydrating");
    leptos::mount::hydrate_body(app::App);
}
