// Route table for the dashboard service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart_config, daily_fragment, health_check, index, today_fragment};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/fragments/today", get(today_fragment))
        .route("/fragments/daily", get(daily_fragment))
        .route("/chart", get(chart_config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
