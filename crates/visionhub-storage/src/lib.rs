//! # visionhub-storage
//!
//! Local filesystem media store. Implements the [`MediaStorage`] trait
//! from `visionhub-core`.
//!
//! [`MediaStorage`]: visionhub_core::traits::storage::MediaStorage

pub mod local;

pub use local::LocalMediaStore;
