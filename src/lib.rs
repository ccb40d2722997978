//! # chat-widget
//!
//! Leptos + WASM chat widget: renders the user/bot transcript, posts input to
//! the chat endpoint, shows typing and loading affordances, and tracks backend
//! connectivity with a periodic health probe.
//!
//! `state` and `controller` hold all behavior and are tested natively;
//! `components` is a thin rendering adapter over them; `net` and `util` hold
//! the browser-only glue behind the `csr` feature.

pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod util;
pub mod validation;

/// WASM entrypoint: mount the widget into the hosting page's `<body>`.
///
/// The host page is plain server-side HTML with no Leptos hydration keys,
/// so the widget is client-rendered rather than hydrated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
