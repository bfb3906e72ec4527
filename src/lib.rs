//! # menumatch-client
//!
//! Leptos + WASM frontend for the MenuMatch plate-labeling workflow.
//! Provides the upload form, the dataset browser, per-sample detail, and
//! the coverage view that cross-references labeled plates against the
//! external menu catalog.
//!
//! This crate contains pages, components, application state, network
//! plumbing for the metadata API and the menu API, and the pure coverage
//! aggregation core in [`coverage`].

pub mod app;
pub mod components;
pub mod config;
pub mod coverage;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook, wires `log` to the
/// console, and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
