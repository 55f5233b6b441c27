//! blogctl - Post and tag file management for static blogs
//!
//! Creates, renames and deletes dated markdown posts under `_posts/` and keeps
//! a `tags/<slug>/index.html` page for every tag a new post references.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
