//! Application state shared across all handlers.

use std::sync::Arc;

use visionhub_core::config::AppConfig;
use visionhub_service::image::ingest::IngestService;
use visionhub_service::image::query::QueryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Upload-and-analyze pipeline.
    pub ingest_service: Arc<IngestService>,
    /// Read-only lookups.
    pub query_service: Arc<QueryService>,
}
