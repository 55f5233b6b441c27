//! Post file use cases

use crate::application::manage_tags::TagService;
use crate::domain::{load_template, ContentEvent, Post, Reporter, POST_TEMPLATE_NAME};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::{Local, NaiveDate};
use log::debug;

/// Service for creating, deleting and renaming posts.
///
/// Posts are looked up by slug alone: the date prefix of an existing file is
/// never known to callers, so every `*-<slug>.md` counts as a match.
pub struct PostService<R: Reporter> {
    repository: FileSystemRepository,
    reporter: R,
    date: Option<NaiveDate>,
}

impl<R: Reporter> PostService<R> {
    pub fn new(repository: FileSystemRepository, reporter: R) -> Self {
        PostService {
            repository,
            reporter,
            date: None,
        }
    }

    /// Use `date` instead of the local calendar date when stamping filenames
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Create every referenced tag, then write `_posts/<today>-<slug>.md`.
    ///
    /// A file with the same name is overwritten. Tag directories created
    /// before a failed post write are kept.
    pub fn create(&self, title: &str, tags: &[String]) -> Result<String> {
        let post = Post::new(title, tags.to_vec())?;

        let tag_service = TagService::new(self.repository.clone(), &self.reporter);
        for tag in &post.tags {
            tag_service.create(tag)?;
        }

        let date = self.today();
        let filename = post.filename_for_date(date);
        let template = load_template(self.repository.root(), POST_TEMPLATE_NAME)?;
        self.repository
            .write_post(&filename, &template.render_post(&post, date))?;

        self.reporter.report(&ContentEvent::PostCreated {
            filename: filename.clone(),
        });
        Ok(filename)
    }

    /// True iff any post file matches the slug of `title`
    pub fn exists(&self, title: &str) -> Result<bool> {
        let post = Post::for_title(title)?;
        Ok(!self.repository.find_posts(&post)?.is_empty())
    }

    /// Remove every post file matching `title`. Tag directories are kept.
    /// Returns the removed filenames.
    pub fn delete(&self, title: &str) -> Result<Vec<String>> {
        let post = Post::for_title(title)?;
        let matches = self.repository.find_posts(&post)?;
        if matches.is_empty() {
            debug!("No post matches '{}'", post.slug);
            return Ok(matches);
        }

        for filename in &matches {
            self.reporter.report(&ContentEvent::PostDeleted {
                path: self.repository.post_display_path(filename),
            });
            self.repository.remove_post(filename)?;
        }

        Ok(matches)
    }

    /// Move every post file matching `old_title` to `<today>-<new slug>.md`.
    ///
    /// The original creation date is not kept. When several files match they
    /// all move to the same destination, so the last one moved wins.
    /// Returns `(from, to)` filename pairs.
    pub fn rename(&self, old_title: &str, new_title: &str) -> Result<Vec<(String, String)>> {
        let old_post = Post::for_title(old_title)?;
        let new_post = Post::for_title(new_title)?;
        let matches = self.repository.find_posts(&old_post)?;
        if matches.is_empty() {
            debug!("No post matches '{}'", old_post.slug);
            return Ok(Vec::new());
        }

        let destination = new_post.filename_for_date(self.today());
        let mut moved = Vec::with_capacity(matches.len());
        for filename in matches {
            self.reporter.report(&ContentEvent::PostRenamed {
                from: self.repository.post_display_path(&filename),
                to: self.repository.post_display_path(&destination),
            });
            self.repository.move_post(&filename, &destination)?;
            moved.push((filename, destination.clone()));
        }

        Ok(moved)
    }
}
