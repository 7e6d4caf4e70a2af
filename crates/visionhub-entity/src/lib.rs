//! # visionhub-entity
//!
//! Domain entity models for VisionHub. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`.

pub mod image;
