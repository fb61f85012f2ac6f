//! Leptos front end for the box control.
//!
//! Modules:
//! - `app`: demo sidebar wiring the controls together
//! - `components`: `BoxControl` and `PreferencesModal`
//! - `util`: pure view helpers and localStorage persistence

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: hydrate the server-rendered sidebar.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
