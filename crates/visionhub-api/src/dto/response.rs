//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use visionhub_entity::image::model::ImageRecord;

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Record ID.
    pub id: Uuid,
    /// Fully-qualified URL of the stored image.
    pub image_url: String,
    /// Client-supplied filename.
    pub original_filename: String,
    /// Analysis text (or the failure marker).
    pub analysis_result: Option<String>,
}

impl UploadResponse {
    /// Build from a record and the server's public base URL.
    pub fn from_record(record: &ImageRecord, public_url: &str) -> Self {
        Self {
            id: record.id,
            image_url: media_url(public_url, &record.storage_path),
            original_filename: record.original_filename.clone(),
            analysis_result: record.analysis_result.clone(),
        }
    }
}

/// Serialized image record for the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecordResponse {
    /// Record ID.
    pub id: Uuid,
    /// Fully-qualified URL of the stored image.
    pub image: String,
    /// Client-supplied filename.
    pub original_filename: String,
    /// Analysis text (or the failure marker); null until analysis ran.
    pub analysis_result: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ImageRecordResponse {
    /// Build from a record and the server's public base URL.
    pub fn from_record(record: &ImageRecord, public_url: &str) -> Self {
        Self {
            id: record.id,
            image: media_url(public_url, &record.storage_path),
            original_filename: record.original_filename.clone(),
            analysis_result: record.analysis_result.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Build the absolute media URL for a stored path.
fn media_url(public_url: &str, storage_path: &str) -> String {
    format!(
        "{}/media/{}",
        public_url.trim_end_matches('/'),
        storage_path.trim_start_matches('/')
    )
}
