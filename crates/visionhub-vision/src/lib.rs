//! # visionhub-vision
//!
//! Client for an OpenAI-compatible vision-completion API. Implements the
//! [`VisionAnalyzer`] trait from `visionhub-core`: one synchronous request
//! per analysis, no retries, no caching, every failure mode mapped to a
//! typed [`AnalysisError`].
//!
//! [`VisionAnalyzer`]: visionhub_core::traits::analyzer::VisionAnalyzer
//! [`AnalysisError`]: visionhub_core::traits::analyzer::AnalysisError

pub mod client;

pub use client::OpenAiVisionClient;
