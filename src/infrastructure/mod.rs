//! Infrastructure layer - File system, configuration, and network access

pub mod config;
pub mod generator;
pub mod photo;
pub mod repository;

pub use config::{Config, DEFAULT_VARIANTS};
pub use generator::{GeminiGenerator, PageGenerator};
pub use photo::EncodedPhoto;
pub use repository::{AlbumRepository, FileSystemRepository, PageEntry};
