//! # client
//!
//! Leptos + WASM frontend for the Chagas Representações storefront.
//!
//! The server renders the page shell through `app::shell`; in the browser the
//! `hydrate` entry point attaches to it. All storefront state lives in one
//! `cart::CartStore` held in a reactive signal, and components only change it
//! through the store's named operations.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
