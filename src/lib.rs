//! # photo-gallery
//!
//! Leptos + WASM frontend for a personal photo gallery: log in or sign up,
//! then upload, browse, download, and delete photos and change the avatar.
//!
//! Pan/zoom math for the photo viewer lives in the `viewport` crate; this
//! crate holds pages, components, page state, and the REST client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
