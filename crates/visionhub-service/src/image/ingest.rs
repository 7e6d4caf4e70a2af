//! Image ingestion pipeline: validate, persist, analyze, persist result.

use std::sync::Arc;

use bytes::Bytes;
use image::ImageFormat;
use tracing::{info, warn};
use uuid::Uuid;

use visionhub_core::config::storage::StorageConfig;
use visionhub_core::error::AppError;
use visionhub_core::result::AppResult;
use visionhub_core::traits::analyzer::VisionAnalyzer;
use visionhub_core::traits::storage::MediaStorage;
use visionhub_entity::image::model::{CreateImageRecord, ImageRecord, extension_of};
use visionhub_entity::image::repository::ImageRepository;

/// Marker prefixed to the persisted analysis text when the external call
/// fails. Uploads still succeed at the HTTP level; the failure is visible
/// only in the data field.
pub const ANALYSIS_FAILURE_PREFIX: &str = "Analysis failed:";

/// One multipart file upload, as extracted by the HTTP layer.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// The filename supplied by the client.
    pub original_filename: String,
    /// The content type declared by the client (advisory only; the actual
    /// bytes are sniffed).
    pub content_type: Option<String>,
    /// The uploaded bytes.
    pub data: Bytes,
}

/// Coordinates one upload end-to-end within a single request.
pub struct IngestService {
    repo: Arc<dyn ImageRepository>,
    storage: Arc<dyn MediaStorage>,
    analyzer: Arc<dyn VisionAnalyzer>,
    config: StorageConfig,
}

impl std::fmt::Debug for IngestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestService").finish()
    }
}

impl IngestService {
    /// Creates a new ingestion service.
    pub fn new(
        repo: Arc<dyn ImageRepository>,
        storage: Arc<dyn MediaStorage>,
        analyzer: Arc<dyn VisionAnalyzer>,
        config: StorageConfig,
    ) -> Self {
        Self {
            repo,
            storage,
            analyzer,
            config,
        }
    }

    /// Run the full pipeline for one upload.
    ///
    /// On validation failure nothing is written. Once validation passes the
    /// record is committed before the external call, then updated exactly
    /// once with either the description or a recognizable failure marker —
    /// the response status is 201 in both cases.
    pub async fn ingest(&self, upload: UploadedImage) -> AppResult<ImageRecord> {
        // Step 1: validate
        let format = self.validate(&upload)?;

        // Step 2: persist pre-analysis
        let storage_path = unique_storage_name(&upload.original_filename, format);
        self.storage
            .write(&storage_path, upload.data.clone())
            .await?;

        let record = self
            .repo
            .create(&CreateImageRecord {
                storage_path: storage_path.clone(),
                original_filename: upload.original_filename.clone(),
            })
            .await?;

        info!(
            record_id = %record.id,
            storage_path = %storage_path,
            size = upload.data.len(),
            "Image stored, starting analysis"
        );

        // Step 3: analyze (blocks this request for the call's duration)
        let local_path = self.storage.local_path(&storage_path);
        let analysis_result = match self.analyzer.analyze(&local_path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(record_id = %record.id, error = %e, "Vision analysis failed");
                format!("{ANALYSIS_FAILURE_PREFIX} {e}")
            }
        };

        // Step 4: persist post-analysis
        let record = self
            .repo
            .set_analysis_result(record.id, &analysis_result)
            .await?;

        info!(record_id = %record.id, "Ingestion completed");
        Ok(record)
    }

    /// Field-level validation of the upload. Rejections carry a `details`
    /// payload attributed to the `image` field and cause zero writes.
    fn validate(&self, upload: &UploadedImage) -> AppResult<ImageFormat> {
        if upload.data.is_empty() {
            return Err(AppError::field_validation(
                "image",
                "The submitted file is empty.",
            ));
        }

        if upload.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::field_validation(
                "image",
                format!(
                    "File exceeds maximum upload size of {} bytes.",
                    self.config.max_upload_size_bytes
                ),
            ));
        }

        image::guess_format(&upload.data).map_err(|_| {
            AppError::field_validation(
                "image",
                "Upload a valid image. The file you uploaded was either not an image or a corrupted image.",
            )
        })
    }
}

/// Generate a unique relative storage name for an upload.
///
/// The original extension is preserved; uploads without one fall back to
/// the sniffed format's canonical extension.
fn unique_storage_name(original_filename: &str, format: ImageFormat) -> String {
    let ext = extension_of(original_filename).unwrap_or_else(|| {
        format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or("bin")
            .to_string()
    });
    format!("images/{}.{}", Uuid::new_v4(), ext)
}
