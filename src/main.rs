// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::live_panel::LivePanel;
use crate::application::polling_service::PollingService;
use crate::domain::context::ProviderContext;
use crate::domain::items::ProviderRegistry;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::teslafi_client::TeslaFiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_panel, get_rows, health_check, stream_panel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Build the dashboard from the registered data item providers
    let registry = ProviderRegistry::with_builtin();
    tracing::info!("Registered {} data item providers", registry.len());
    let context = Arc::new(ProviderContext::new(config.display.clone()));
    let panel = Arc::new(LivePanel::new(DashboardService::new(context, &registry)));

    if config.teslafi.has_api_key() {
        let client = Arc::new(TeslaFiClient::new(
            config.teslafi.api_base.clone(),
            config.teslafi.api_key.clone(),
            config.teslafi.api_query.clone(),
        ));
        let poller = PollingService::new(client, panel.clone(), config.teslafi.poll_settings());
        tokio::spawn(poller.run());
    } else {
        panel.on_credential_missing().await;
    }

    let state = Arc::new(AppState { panel });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/rows", get(get_rows))
        .route("/panel", get(get_panel))
        .route("/stream", get(stream_panel))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    tracing::info!("Starting teslafi-dashboard on {}", config.server.listen);

    axum::serve(listener, router).await?;

    Ok(())
}
