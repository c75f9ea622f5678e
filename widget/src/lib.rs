//! # chat-widget
//!
//! Leptos + WASM embeddable AI chat widget: an animated chat window with a
//! launcher button, a message list, a text input, one REST call per turn to a
//! configured AI endpoint, and conversation history persisted in a cookie.
//!
//! The crate splits into framework-free state (`state`, `config`), the
//! network and persistence seams (`net`, `util::history`), the Leptos views
//! (`components`), and the host-facing `app` shell. `session::ChatSession`
//! drives the same chat contracts without a UI.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered host page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
