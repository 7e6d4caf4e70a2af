//! Route definitions for the VisionHub HTTP API.
//!
//! API routes are mounted under `/api`; stored media is served under
//! `/media` so the `image_url` in responses resolves. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(image_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest_service(
            "/media",
            ServeDir::new(&state.config.storage.media_root),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Upload and lookup endpoints.
fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/images/upload", post(handlers::image::upload))
        .route("/images/all", get(handlers::image::list_all))
        .route("/images/by-id/{id}", get(handlers::image::get_by_id))
        .route(
            "/images/by-name/{filename}",
            get(handlers::image::get_by_name),
        )
}

/// Liveness endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
