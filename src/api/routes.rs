//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Chat endpoint
        .route("/chat", post(handlers::chat))
        .with_state(state)
}

/// Root-level alias for deployments whose clients call `/chat` directly
pub fn compat_routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .with_state(state)
}
