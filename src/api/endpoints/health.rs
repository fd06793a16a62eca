//! Health check endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::types::{ApiContext, HealthResponse};
use crate::config;

/// `GET /api/health`: liveness probe for portal clients.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: config::APP_NAME,
        version: config::APP_VERSION,
        context_gating: ctx.extractor.options().gating.as_str(),
    })
}
