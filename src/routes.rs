//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR page mounting the chat widget, the
//! hydration bundle under `/pkg`, and a health probe. The widget talks to its
//! AI endpoint directly from the browser; the host has no chat routes.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use chat_widget::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-Leptos routes.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: API routes + Leptos SSR + static bundle under
/// `site_root/pkg`.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
