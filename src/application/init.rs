//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Set up `.blogctl/`, the posts directory and the tags directory at `path`.
/// Existing posts and tags are left alone.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    info!("Initialized site at {}", path.display());

    Ok(repo)
}
