//! # client
//!
//! Leptos + WASM front-end for the Park Inn Lodge booking and guest-services
//! site: landing page, guest and operator sign-in, signup, booking, guest
//! portal, and operator dashboard.
//!
//! Session state comes from the `session` crate; this crate supplies the
//! browser transport (`gloo-net`), `localStorage` token persistence, routing,
//! and pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
