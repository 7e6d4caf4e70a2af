//! # visionhub-api
//!
//! HTTP layer for VisionHub: axum router, handlers, DTOs, middleware,
//! and the shared application state.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
