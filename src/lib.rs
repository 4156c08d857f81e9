//! # marktracker
//!
//! Leptos + WASM frontend for the student mark tracker. Administrators
//! manage accounts, teachers manage marks and complaints, students view
//! marks and file complaints; all persistence sits behind a remote REST API.
//!
//! The `session` module is the core: a single store for the client-held
//! credential bundle, the gate that guards role screens, and the login state
//! machine. It has no Leptos dependency. `state` binds it into reactive
//! context, and `pages`/`components` render the screens on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ClientConfig;

    console_error_panic_hook::set_once();
    let (config, config_err) = ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_err {
        log::warn!("config: {e}; using default");
    }
    log::info!("marktracker: api base {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
