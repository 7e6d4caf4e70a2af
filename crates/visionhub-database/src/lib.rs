//! # visionhub-database
//!
//! PostgreSQL access layer for VisionHub: connection pool creation,
//! migration runner, and the concrete repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
