//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod manage_posts;
pub mod manage_tags;

pub use manage_config::ConfigService;
pub use manage_posts::PostService;
pub use manage_tags::TagService;
