//! Shared test helpers for integration tests.
//!
//! The router under test is the real one; the repository, media store,
//! and vision analyzer are swapped for hermetic in-process stands-ins
//! through the seam traits.

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use visionhub_core::config::AppConfig;
use visionhub_core::config::database::DatabaseConfig;
use visionhub_core::config::logging::LoggingConfig;
use visionhub_core::config::server::ServerConfig;
use visionhub_core::config::storage::StorageConfig;
use visionhub_core::config::vision::VisionConfig;
use visionhub_core::error::AppError;
use visionhub_core::result::AppResult;
use visionhub_core::traits::analyzer::{AnalysisError, VisionAnalyzer};
use visionhub_core::traits::storage::MediaStorage;
use visionhub_entity::image::model::{CreateImageRecord, ImageRecord};
use visionhub_entity::image::repository::ImageRepository;
use visionhub_service::image::ingest::IngestService;
use visionhub_service::image::query::QueryService;
use visionhub_storage::local::LocalMediaStore;

pub const MULTIPART_BOUNDARY: &str = "visionhub-test-boundary";

/// Minimal JPEG magic bytes; upload validation sniffs only the header.
pub const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg-payload";

/// In-memory [`ImageRepository`] with stable newest-first ordering.
#[derive(Debug, Default)]
pub struct InMemoryImageRepository {
    records: Mutex<Vec<(u64, ImageRecord)>>,
    seq: AtomicU64,
}

impl InMemoryImageRepository {
    /// Number of stored records (synchronous, for assertions).
    pub fn records_len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn create(&self, record: &CreateImageRecord) -> AppResult<ImageRecord> {
        let now = Utc::now();
        let rec = ImageRecord {
            id: Uuid::new_v4(),
            storage_path: record.storage_path.clone(),
            original_filename: record.original_filename.clone(),
            analysis_result: None,
            created_at: now,
            updated_at: now,
        };
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().push((seq, rec.clone()));
        Ok(rec)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ImageRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|(_, r)| r.id == id)
            .map(|(_, r)| r.clone()))
    }

    async fn find_by_filename(&self, filename: &str) -> AppResult<Option<ImageRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, r)| r.original_filename == filename)
            .max_by_key(|(seq, _)| *seq)
            .map(|(_, r)| r.clone()))
    }

    async fn list_all(&self) -> AppResult<Vec<ImageRecord>> {
        let mut all = self.records.lock().unwrap().clone();
        all.sort_by(|(sa, _), (sb, _)| sb.cmp(sa));
        Ok(all.into_iter().map(|(_, r)| r).collect())
    }

    async fn set_analysis_result(&self, id: Uuid, result: &str) -> AppResult<ImageRecord> {
        let mut records = self.records.lock().unwrap();
        let rec = records
            .iter_mut()
            .find(|(_, r)| r.id == id)
            .map(|(_, r)| r)
            .ok_or_else(|| AppError::not_found(format!("Image record {id} not found")))?;
        rec.analysis_result = Some(result.to_string());
        rec.updated_at = Utc::now();
        Ok(rec.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

/// Analyzer that always succeeds with a fixed description.
pub struct StubAnalyzer;

#[async_trait]
impl VisionAnalyzer for StubAnalyzer {
    async fn analyze(&self, _image_path: &Path) -> Result<String, AnalysisError> {
        Ok("A small cat sitting on a windowsill.".to_string())
    }
}

/// Analyzer that always fails with a given typed error.
pub struct FailingAnalyzer(pub AnalysisError);

#[async_trait]
impl VisionAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _image_path: &Path) -> Result<String, AnalysisError> {
        Err(self.0.clone())
    }
}

/// A parsed test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Bytes,
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryImageRepository>,
    _media_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with an always-succeeding analyzer.
    pub async fn new() -> Self {
        Self::with_analyzer(Arc::new(StubAnalyzer)).await
    }

    /// Create a test application with the given analyzer.
    pub async fn with_analyzer(analyzer: Arc<dyn VisionAnalyzer>) -> Self {
        let media_dir = tempfile::tempdir().expect("tempdir");
        let media_root = media_dir.path().to_str().unwrap().to_string();

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://unused-in-tests".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            storage: StorageConfig {
                media_root: media_root.clone(),
                max_upload_size_bytes: 1_048_576,
            },
            vision: VisionConfig::default(),
            logging: LoggingConfig::default(),
        };

        let repo = Arc::new(InMemoryImageRepository::default());
        let storage: Arc<dyn MediaStorage> = Arc::new(
            LocalMediaStore::new(&media_root).await.expect("media store"),
        );

        let ingest_service = Arc::new(IngestService::new(
            Arc::clone(&repo) as Arc<dyn ImageRepository>,
            Arc::clone(&storage),
            analyzer,
            config.storage.clone(),
        ));
        let query_service = Arc::new(QueryService::new(
            Arc::clone(&repo) as Arc<dyn ImageRepository>,
        ));

        let state = visionhub_api::state::AppState {
            config: Arc::new(config),
            ingest_service,
            query_service,
        };

        Self {
            router: visionhub_api::router::build_router(state),
            repo,
            _media_dir: media_dir,
        }
    }

    /// Send a bodyless request.
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    /// Upload a file under the `image` multipart field.
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let body = multipart_body("image", Some((filename, content_type)), data);
        self.send_multipart(body).await
    }

    /// Send a multipart request whose file sits under the wrong field name.
    pub async fn upload_wrong_field(&self, data: &[u8]) -> TestResponse {
        let body = multipart_body("attachment", Some(("cat.jpg", "image/jpeg")), data);
        self.send_multipart(body).await
    }

    async fn send_multipart(&self, body: Vec<u8>) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri("/api/images/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);
        TestResponse { status, body, raw }
    }
}

/// Assemble a single-field multipart/form-data body.
fn multipart_body(field: &str, file: Option<(&str, &str)>, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    match file {
        Some((filename, content_type)) => {
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
                     Content-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
        }
        None => {
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
            );
        }
    }
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}
