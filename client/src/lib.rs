//! # client
//!
//! Leptos + WASM frontend for Docshelf, a small document library backed by a
//! hosted Postgres REST API and object store.
//!
//! This crate contains the page, components, application state, the backend
//! client, and browser helpers. The `ssr` feature is used by the host to
//! render the shell; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::net::config::BackendConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let backend = BackendConfig::from_page();
    leptos::mount::hydrate_body(move || leptos::view! { <App backend=backend.clone()/> });
}
