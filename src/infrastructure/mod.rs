//! Infrastructure layer - Filesystem access and persistence

pub mod config;
pub mod repository;

pub use config::SiteConfig;
pub use repository::{FileSystemRepository, SiteRepository};
