//! # asaanform
//!
//! Leptos + WASM client for AsaanForm, an AI form-filling assistant.
//!
//! The interesting part is [`router`]: a hash-fragment router that keeps the
//! current route in step with the address bar and publishes changes to
//! observers. Pages, the navbar, and the mock auth state are thin consumers
//! of it. There is no backend; auth and downloads are local-only.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;

/// Browser entry point: install logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let config = match config::AppConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; using default config");
            config::AppConfig::default()
        }
    };
    if let Err(e) = console_log::init_with_level(config.log_level.as_log_level()) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    log::info!("starting {}", config.title);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
