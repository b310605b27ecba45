//! # clinic-admin
//!
//! Leptos + WASM admin frontend for the clinic booking application.
//! Replaces the React `admin/` pages with a Rust-native UI layer.
//!
//! This crate contains the routed pages (appointment listing, work-schedule
//! editing), shared admin state provided via context, the pure pagination
//! and form models, and the REST helpers that talk to the booking backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
