//! # wishlist-client
//!
//! Leptos + WASM browser client for the shared-wishlist application.
//!
//! Users register, sign in, build wishlists, add products, invite
//! collaborators, and comment on or react to items. All data lives on the
//! remote backend; this crate holds only the session token and derives the
//! authentication flag that gates client-side routes.
//!
//! Build for the browser with the `csr` feature (e.g. `trunk serve --features csr`).
//! Without it, browser glue compiles to inert stubs so the routing, request
//! and validation logic can be unit tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: wire up logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("wishlist client starting; api base {}", config::api_base_url());
    leptos::mount::mount_to_body(app::App);
}
