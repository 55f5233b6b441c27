//! Front-matter templates for post files and tag index pages

use crate::domain::{Post, Tag};
use crate::error::{BlogError, Result};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const POST_TEMPLATE_NAME: &str = "post.md";
pub const TAG_INDEX_TEMPLATE_NAME: &str = "tag-index.html";

// Built-in template constants
const POST_TEMPLATE: &str = "---\nlayout: post\ntags: [{TAGS}]\n---\n";
const TAG_INDEX_TEMPLATE: &str =
    "---\nlayout: tag-posts\ntag: {TAG}\ntitle: posts tagged with {TAG}\n---\n";

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Z_]+)\}").unwrap())
}

/// Template for generated content files
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create template from built-in template name
    pub fn from_builtin(template_name: &str) -> Result<Self> {
        let content = match template_name {
            POST_TEMPLATE_NAME => POST_TEMPLATE,
            TAG_INDEX_TEMPLATE_NAME => TAG_INDEX_TEMPLATE,
            _ => {
                return Err(BlogError::Template(format!(
                    "Unknown template: {}",
                    template_name
                )))
            }
        };

        Ok(Template {
            content: content.to_string(),
        })
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BlogError::Template(format!("Failed to read template file: {}", e)))?;

        Ok(Template { content })
    }

    /// Render a post file created on `date`.
    /// Tag names are emitted exactly as given, not as slugs.
    pub fn render_post(&self, post: &Post, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d").to_string();
        self.render(|name| match name {
            "TAGS" => Some(post.tag_list()),
            "TITLE" => Some(post.title.clone()),
            "DATE" => Some(date.clone()),
            _ => None,
        })
    }

    /// Render the index page of a tag directory
    pub fn render_tag_index(&self, tag: &Tag) -> String {
        self.render(|name| match name {
            "TAG" => Some(tag.slug.clone()),
            "TITLE" => Some(tag.name.clone()),
            _ => None,
        })
    }

    /// Substitute every `{NAME}` in one pass; inserted values are never
    /// scanned again. Unknown names are left unchanged.
    fn render<F>(&self, value: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        placeholder_regex()
            .replace_all(&self.content, |caps: &Captures| {
                value(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Load template from `.blogctl/templates/` or fall back to built-in
pub fn load_template(site_root: &Path, template_name: &str) -> Result<Template> {
    let custom_path = site_root
        .join(".blogctl")
        .join("templates")
        .join(template_name);

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Template::from_builtin(template_name)
    }
}
