//! # filmfund
//!
//! Leptos + WASM frontend for the FilmFund.io investor and admin areas.
//!
//! The crate's job is route protection: a per-role session store, an access
//! gate that renders protected pages or replace-navigates to the matching
//! login page, and the login/logout flow that writes the session before
//! landing. Identity checks themselves are delegated to a hosted service.

pub mod app;
pub mod auth;
pub mod config;
pub mod gate;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::debug!("hydrating filmfund");
    leptos::mount::hydrate_body(app::App);
}
