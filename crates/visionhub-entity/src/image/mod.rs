//! Image domain entities.

pub mod model;
pub mod repository;

pub use model::{CreateImageRecord, ImageRecord};
pub use repository::ImageRepository;
