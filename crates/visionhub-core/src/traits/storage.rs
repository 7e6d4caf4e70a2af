//! Media storage trait for stored upload content.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the media store holding uploaded image bytes.
///
/// The trait is defined here in `visionhub-core` and implemented in
/// `visionhub-storage`. Paths are relative to the store's media root
/// (e.g. `images/<uuid>.jpg`); the store guarantees they resolve to
/// local-disk files so the vision analyzer can read them back.
#[async_trait]
pub trait MediaStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Write bytes to a file at the given relative path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a file into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Check whether a file exists at the given relative path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Delete a file at the given relative path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Resolve a relative path to its absolute location on local disk.
    fn local_path(&self, path: &str) -> PathBuf;
}
