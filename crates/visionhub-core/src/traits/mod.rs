//! Seam traits implemented by the leaf crates.

pub mod analyzer;
pub mod storage;

pub use analyzer::{AnalysisError, VisionAnalyzer};
pub use storage::MediaStorage;
