//! Image ingestion and query services.

pub mod ingest;
pub mod query;

pub use ingest::{IngestService, UploadedImage};
pub use query::QueryService;
