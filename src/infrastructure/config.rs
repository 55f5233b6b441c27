//! Site configuration management

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".blogctl";
const CONFIG_FILE: &str = "config.toml";

/// Directory layout of a site. Every field falls back to its default when
/// missing from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub posts_dir: String,
    pub tags_dir: String,
    pub tag_index: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            posts_dir: "_posts".to_string(),
            tags_dir: "tags".to_string(),
            tag_index: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from .blogctl/config.toml in the given directory.
    /// A site without the file uses the default layout.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SiteConfig::default())
            }
            Err(e) => return Err(BlogError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .blogctl/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "posts_dir" => Ok(self.posts_dir.as_str()),
            "tags_dir" => Ok(self.tags_dir.as_str()),
            "tag_index" => Ok(self.tag_index.as_str()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(BlogError::Config(format!(
                "Value for '{}' cannot be empty",
                key
            )));
        }

        let slot = match key {
            "posts_dir" => &mut self.posts_dir,
            "tags_dir" => &mut self.tags_dir,
            "tag_index" => &mut self.tag_index,
            _ => return Err(unknown_key(key)),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// Key/value pairs in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("posts_dir", self.posts_dir.as_str()),
            ("tags_dir", self.tags_dir.as_str()),
            ("tag_index", self.tag_index.as_str()),
        ]
    }
}

fn unknown_key(key: &str) -> BlogError {
    BlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: posts_dir, tags_dir, tag_index",
        key
    ))
}
