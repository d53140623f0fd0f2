//! Prometheus scrape endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Render every recorded metric in the Prometheus text format
///
/// GET /metrics
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics_handle() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled".to_string()),
    }
}
