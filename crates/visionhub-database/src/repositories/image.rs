//! Image record repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use visionhub_core::error::{AppError, ErrorKind};
use visionhub_core::result::AppResult;
use visionhub_entity::image::model::{CreateImageRecord, ImageRecord};
use visionhub_entity::image::repository::ImageRepository;

/// PostgreSQL-backed [`ImageRepository`].
#[derive(Debug, Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    /// Create a new image repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    async fn create(&self, record: &CreateImageRecord) -> AppResult<ImageRecord> {
        sqlx::query_as::<_, ImageRecord>(
            "INSERT INTO image_records (id, storage_path, original_filename) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&record.storage_path)
        .bind(&record.original_filename)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create image record", e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ImageRecord>> {
        sqlx::query_as::<_, ImageRecord>("SELECT * FROM image_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find image record", e)
            })
    }

    async fn find_by_filename(&self, filename: &str) -> AppResult<Option<ImageRecord>> {
        // Duplicate filenames are allowed; the newest upload wins.
        sqlx::query_as::<_, ImageRecord>(
            "SELECT * FROM image_records WHERE original_filename = $1 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find image record by filename",
                e,
            )
        })
    }

    async fn list_all(&self) -> AppResult<Vec<ImageRecord>> {
        sqlx::query_as::<_, ImageRecord>(
            "SELECT * FROM image_records ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list image records", e)
        })
    }

    async fn set_analysis_result(&self, id: Uuid, result: &str) -> AppResult<ImageRecord> {
        sqlx::query_as::<_, ImageRecord>(
            "UPDATE image_records SET analysis_result = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(result)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update analysis result", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Image record {id} not found")))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM image_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count image records", e)
            })?;
        Ok(total as u64)
    }
}
