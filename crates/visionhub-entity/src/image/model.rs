//! Image record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted upload-and-analysis unit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImageRecord {
    /// Unique record identifier, assigned exactly once at creation.
    pub id: Uuid,
    /// Relative path of the stored binary under the media root. Generated
    /// from a fresh UUID so it is unique and never reused.
    pub storage_path: String,
    /// The filename supplied by the uploading client, stored verbatim.
    pub original_filename: String,
    /// Analysis text; absent until the analysis step completes, then
    /// overwritten whole on every re-analysis.
    pub analysis_result: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new image record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateImageRecord {
    /// Relative path of the stored binary under the media root.
    pub storage_path: String,
    /// The client-supplied filename.
    pub original_filename: String,
}

/// Extract the extension of a filename (lowercase), if it has one.
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit('.')
        .next()
        .filter(|ext| *ext != name && !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}
