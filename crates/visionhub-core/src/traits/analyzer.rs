//! Vision analyzer trait and its tagged error type.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single vision analysis attempt.
///
/// Every way the external call can go wrong is represented as a variant so
/// the ingestion pipeline can decide explicitly how to persist or surface
/// it, instead of receiving an error disguised as a successful description.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// No API credential was configured.
    #[error("vision API credential is not configured")]
    MissingCredential,
    /// The stored image file could not be read back.
    #[error("image file not found on server: {0}")]
    FileMissing(String),
    /// The request exceeded the configured network timeout.
    #[error("vision API request timed out")]
    Timeout,
    /// The request failed at the transport level (DNS, connect, TLS).
    #[error("vision API request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success HTTP status.
    #[error("vision API returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },
    /// The response body could not be interpreted.
    #[error("vision API response was malformed: {0}")]
    MalformedResponse(String),
}

/// Trait for turning a stored image into a natural-language description.
///
/// Implemented by the OpenAI-compatible client in `visionhub-vision`;
/// tests substitute stub implementations. Exactly one attempt per call,
/// no retries, no caching.
#[async_trait]
pub trait VisionAnalyzer: Send + Sync + 'static {
    /// Analyze the image at the given local path and return its description.
    async fn analyze(&self, image_path: &Path) -> Result<String, AnalysisError>;
}
