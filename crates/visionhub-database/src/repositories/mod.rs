//! Concrete repository implementations.

pub mod image;

pub use image::PgImageRepository;
