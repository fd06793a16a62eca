//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::ServiceConfig;

/// Build the extraction API router.
pub fn api_router(config: Arc<ServiceConfig>) -> Router {
    build_router(ApiContext::new(config))
}

fn build_router(ctx: ApiContext) -> Router {
    let body_limit = ctx.body_limit();

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/extract", post(endpoints::extract::extract))
        .route("/intake/merge", post(endpoints::intake::merge))
        .route("/documents/insights", post(endpoints::documents::insights))
        .route("/visits/review", post(endpoints::visits::review))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(body_limit))
        // ServiceBuilder layers run top to bottom: first listed is outermost.
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ))
                .layer(axum::middleware::from_fn(middleware::audit::log_access)),
        );

    Router::new().nest("/api", routes)
}
