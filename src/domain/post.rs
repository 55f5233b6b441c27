//! Post entity and post filename rules

use crate::domain::slug::slugify;
use crate::error::Result;
use chrono::NaiveDate;

const POST_EXTENSION: &str = ".md";

/// A single authored article, addressed by the slug of its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub slug: String,
    /// Tag names in the order given, duplicates kept.
    pub tags: Vec<String>,
}

impl Post {
    pub fn new(title: &str, tags: Vec<String>) -> Result<Self> {
        Ok(Post {
            title: title.to_string(),
            slug: slugify(title)?,
            tags,
        })
    }

    /// A post used only for lookup (delete, rename, exists).
    pub fn for_title(title: &str) -> Result<Self> {
        Self::new(title, Vec::new())
    }

    /// Filename for this post when created on `date` (`YYYY-MM-DD-<slug>.md`)
    pub fn filename_for_date(&self, date: NaiveDate) -> String {
        format!("{}-{}{}", date.format("%Y-%m-%d"), self.slug, POST_EXTENSION)
    }

    /// True if `filename` matches `*-<slug>.md`.
    ///
    /// Whatever precedes the slug is opaque, so a post whose slug merely ends
    /// in `-<slug>` matches as well.
    pub fn matches_filename(&self, filename: &str) -> bool {
        filename.ends_with(&format!("-{}{}", self.slug, POST_EXTENSION))
    }

    /// Tag list as it appears inside the front matter brackets
    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }
}
