//! Read-only lookups over image records.

use std::sync::Arc;

use uuid::Uuid;

use visionhub_core::error::AppError;
use visionhub_core::result::AppResult;
use visionhub_entity::image::model::ImageRecord;
use visionhub_entity::image::repository::ImageRepository;

/// Thin passthrough to the repository for the read endpoints.
pub struct QueryService {
    repo: Arc<dyn ImageRepository>,
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService").finish()
    }
}

impl QueryService {
    /// Creates a new query service.
    pub fn new(repo: Arc<dyn ImageRepository>) -> Self {
        Self { repo }
    }

    /// Look up a record by ID.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ImageRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Image record {id} not found")))
    }

    /// Look up the newest record with the given original filename.
    pub async fn get_by_filename(&self, filename: &str) -> AppResult<ImageRecord> {
        self.repo
            .find_by_filename(filename)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("No image record with filename '{filename}'"))
            })
    }

    /// List all records, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<ImageRecord>> {
        self.repo.list_all().await
    }
}
