//! Tag directory use cases

use crate::domain::{load_template, ContentEvent, Reporter, Tag, TAG_INDEX_TEMPLATE_NAME};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use log::debug;

/// Service for creating and removing tag directories
pub struct TagService<R: Reporter> {
    repository: FileSystemRepository,
    reporter: R,
}

impl<R: Reporter> TagService<R> {
    pub fn new(repository: FileSystemRepository, reporter: R) -> Self {
        TagService {
            repository,
            reporter,
        }
    }

    /// True iff `tags/<slug>` exists as a directory
    pub fn exists(&self, name: &str) -> Result<bool> {
        let tag = Tag::new(name)?;
        Ok(self.repository.tag_exists(&tag))
    }

    /// Create the tag directory and its index page.
    /// Does nothing, and reports nothing, when the directory already exists.
    /// Returns whether the tag was created.
    pub fn create(&self, name: &str) -> Result<bool> {
        let tag = Tag::new(name)?;
        if self.repository.tag_exists(&tag) {
            debug!("Tag '{}' already exists", tag.slug);
            return Ok(false);
        }

        self.reporter.report(&ContentEvent::TagCreated {
            slug: tag.slug.clone(),
        });

        self.repository.create_tag_dir(&tag)?;
        let template = load_template(self.repository.root(), TAG_INDEX_TEMPLATE_NAME)?;
        self.repository
            .write_tag_index(&tag, &template.render_tag_index(&tag))?;

        Ok(true)
    }

    /// Remove the tag directory recursively. Posts referencing the tag are
    /// left untouched. Returns whether anything was removed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let tag = Tag::new(name)?;
        if !self.repository.tag_exists(&tag) {
            debug!("Tag '{}' does not exist", tag.slug);
            return Ok(false);
        }

        self.reporter.report(&ContentEvent::TagRemoved {
            slug: tag.slug.clone(),
        });
        self.repository.remove_tag_dir(&tag)?;

        Ok(true)
    }
}
