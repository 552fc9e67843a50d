use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::JSend;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub submissions: usize,
    pub users: usize,
    pub admins: usize,
}

/// Plain-text liveness probe.
/// Route: GET /
pub async fn index() -> &'static str {
    "image-server is up"
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<JSend<HealthResponse>> {
    JSend::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        submissions: state.catalogue.submission_count(),
        users: state.catalogue.user_count(),
        admins: state.catalogue.admin_count(),
    })
}
