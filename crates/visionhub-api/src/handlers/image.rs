//! Image upload and lookup handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use uuid::Uuid;

use visionhub_core::error::AppError;
use visionhub_service::image::ingest::UploadedImage;

use crate::dto::response::{ImageRecordResponse, UploadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/images/upload — multipart upload, analyzed synchronously.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("image") {
            file_name = field.file_name().map(String::from);
            content_type = field.content_type().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let data = data
        .ok_or_else(|| AppError::field_validation("image", "No file was submitted."))?;

    let record = state
        .ingest_service
        .ingest(UploadedImage {
            original_filename: file_name.unwrap_or_else(|| "upload".to_string()),
            content_type,
            data,
        })
        .await?;

    let body = UploadResponse::from_record(&record, &state.config.server.public_url);
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/images/by-id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ImageRecordResponse>, ApiError> {
    let record = state.query_service.get_by_id(id).await?;
    Ok(Json(ImageRecordResponse::from_record(
        &record,
        &state.config.server.public_url,
    )))
}

/// GET /api/images/by-name/{filename}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<ImageRecordResponse>, ApiError> {
    let record = state.query_service.get_by_filename(&filename).await?;
    Ok(Json(ImageRecordResponse::from_record(
        &record,
        &state.config.server.public_url,
    )))
}

/// GET /api/images/all — every record, newest first.
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ImageRecordResponse>>, ApiError> {
    let records = state.query_service.list_all().await?;
    let public_url = &state.config.server.public_url;
    Ok(Json(
        records
            .iter()
            .map(|r| ImageRecordResponse::from_record(r, public_url))
            .collect(),
    ))
}
