//! Repository trait for image records.

use async_trait::async_trait;
use uuid::Uuid;

use visionhub_core::result::AppResult;

use super::model::{CreateImageRecord, ImageRecord};

/// Persistence seam for [`ImageRecord`]s.
///
/// Implemented against PostgreSQL in `visionhub-database`; tests supply
/// an in-memory implementation. Records are never deleted through this
/// trait (deletion is an administrative action outside the pipeline).
#[async_trait]
pub trait ImageRepository: Send + Sync + 'static {
    /// Insert a new record with `analysis_result` absent and return it.
    async fn create(&self, record: &CreateImageRecord) -> AppResult<ImageRecord>;

    /// Find a record by its ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ImageRecord>>;

    /// Find the newest record with the given original filename.
    async fn find_by_filename(&self, filename: &str) -> AppResult<Option<ImageRecord>>;

    /// List all records, newest first.
    async fn list_all(&self) -> AppResult<Vec<ImageRecord>>;

    /// Overwrite the analysis result of a record and return the updated row.
    async fn set_analysis_result(&self, id: Uuid, result: &str) -> AppResult<ImageRecord>;

    /// Count stored records.
    async fn count(&self) -> AppResult<u64>;
}
