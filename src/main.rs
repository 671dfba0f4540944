// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::daily_loader::DailyLoader;
use crate::application::dashboard_page::DashboardPage;
use crate::application::refresh_scheduler::RefreshScheduler;
use crate::application::today_loader::TodayLoader;
use crate::infrastructure::api_client::HttpAirQualitySource;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    tracing::info!(api = %config.api.base_url, "Loaded configuration");

    // Create source (infrastructure layer)
    let source = Arc::new(HttpAirQualitySource::new(&config.api)?);

    // Create loaders and scheduler (application layer)
    let page = DashboardPage::shared();
    let today_loader = TodayLoader::new(source.clone(), page.clone());
    let daily_loader = DailyLoader::new(source, page.clone());
    let refresh = RefreshScheduler::new(today_loader, daily_loader, config.refresh.interval()).start();

    // Build router (presentation layer)
    let state = Arc::new(AppState {
        page,
        refresh_secs: config.refresh.interval_secs,
    });
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!(%addr, "Starting air-quality dashboard");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresh.stop().await;
    tracing::info!("Shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
