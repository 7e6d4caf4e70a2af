//! Tower/axum middleware builders.

pub mod cors;
pub mod logging;
