//! Route definitions
//!
//! Account routes are mounted under /api/v1; health probes and the metrics
//! scrape endpoint sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, observability, premium, reactions, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
        .route("/metrics", get(observability::render_metrics))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Routes acting on the authenticated user
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/reactions", post(reactions::react))
        .route(
            "/users/@me/premium",
            post(premium::grant).delete(premium::revoke),
        )
}
