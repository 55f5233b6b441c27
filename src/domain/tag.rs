//! Tag entity

use crate::domain::slug::slugify;
use crate::error::Result;

/// A topic label, materialized as `tags/<slug>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Tag {
            name: name.to_string(),
            slug: slugify(name)?,
        })
    }

    /// Directory name under the tags directory
    pub fn dir_name(&self) -> &str {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_slug() {
        let tag = Tag::new("Ruby Tips").unwrap();
        assert_eq!(tag.name, "Ruby Tips");
        assert_eq!(tag.slug, "ruby-tips");
        assert_eq!(tag.dir_name(), "ruby-tips");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(Tag::new("  ").is_err());
    }
}
