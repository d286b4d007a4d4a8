//! # animal-hotels-ui
//!
//! Leptos + WASM admin client for the Animal Hotels boarding service.
//!
//! The crate owns the session state machine (restore, login, logout), the
//! route guard consulted before protected pages render, and the tutor/animal
//! CRUD pages that talk to the external REST API. Browser-only plumbing sits
//! behind the `csr` feature so the session core compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
///
/// Installs console logging, restores the persisted session exactly once, and
/// mounts the application with that session injected.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    let session = state::session::SessionMachine::startup(util::storage::LocalStorage);
    leptos::mount::mount_to_body(move || leptos::view! { <app::App session=session/> });
}
