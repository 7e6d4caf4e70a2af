//! # visionhub-service
//!
//! Business logic for VisionHub: the upload-and-analyze ingestion
//! pipeline and the read-only query services. Services hold their
//! collaborators behind the seam traits from `visionhub-core` and
//! `visionhub-entity`.

pub mod image;
