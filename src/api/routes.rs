use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::index))
        // Image content (optional trailing extension is stripped in the handler)
        .route("/rawi/:id", get(handlers::serve_raw))
        .route("/i/:id", get(handlers::serve_preview))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
