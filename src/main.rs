//! VisionHub Server — image upload and vision-analysis backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use visionhub_core::config::AppConfig;
use visionhub_core::error::AppError;
use visionhub_core::traits::analyzer::VisionAnalyzer;
use visionhub_core::traits::storage::MediaStorage;
use visionhub_entity::image::repository::ImageRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("VISIONHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VisionHub v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db_pool = visionhub_database::connection::create_pool(&config.database).await?;
    visionhub_database::migration::run_migrations(&db_pool).await?;

    // Media storage
    let storage: Arc<dyn MediaStorage> = Arc::new(
        visionhub_storage::local::LocalMediaStore::new(&config.storage.media_root).await?,
    );
    tracing::info!(media_root = %config.storage.media_root, "Media storage initialized");

    // Vision analysis client
    if config.vision.api_key.is_empty() {
        tracing::warn!("No vision API key configured; analysis will soft-fail per upload");
    }
    let analyzer: Arc<dyn VisionAnalyzer> = Arc::new(
        visionhub_vision::client::OpenAiVisionClient::new(config.vision.clone())?,
    );

    // Repositories and services
    let image_repo: Arc<dyn ImageRepository> = Arc::new(
        visionhub_database::repositories::image::PgImageRepository::new(db_pool.clone()),
    );

    let ingest_service = Arc::new(visionhub_service::image::ingest::IngestService::new(
        Arc::clone(&image_repo),
        Arc::clone(&storage),
        Arc::clone(&analyzer),
        config.storage.clone(),
    ));
    let query_service = Arc::new(visionhub_service::image::query::QueryService::new(
        Arc::clone(&image_repo),
    ));

    // HTTP server
    let app_state = visionhub_api::state::AppState {
        config: Arc::new(config.clone()),
        ingest_service,
        query_service,
    };

    let app = visionhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VisionHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("VisionHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
