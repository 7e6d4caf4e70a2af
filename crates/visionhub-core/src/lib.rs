//! # visionhub-core
//!
//! Core crate for VisionHub. Contains configuration schemas, the seam
//! traits implemented by the leaf crates (repository, media storage,
//! vision analyzer), and the unified error system.
//!
//! This crate has **no** internal dependencies on other VisionHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
