// HTTP request handlers
use crate::application::chart_renderer::ChartConfig;
use crate::infrastructure::markup;
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = state.page.read().await;
    Html(markup::render_page(&page, state.refresh_secs))
}

pub async fn today_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.read().await.today().markup().to_string())
}

pub async fn daily_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.read().await.daily_table().markup().to_string())
}

/// Live chart config, `null` until the first successful daily load
pub async fn chart_config(State(state): State<Arc<AppState>>) -> Json<Option<ChartConfig>> {
    Json(state.page.read().await.chart_config().cloned())
}
