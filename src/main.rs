mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = config::log_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chatbot host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
    let config = HostConfig::from_env()?;

    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let site_root = config.site_root_or(&conf.leptos_options.site_root);
    let app = routes::app(conf.leptos_options, &site_root);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %site_root.display(), "chatbot host listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
