//! File system repository

use crate::domain::{Post, Tag};
use crate::error::{BlogError, Result};
use crate::infrastructure::config::{SiteConfig, CONFIG_DIR};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const ROOT_ENV_VAR: &str = "BLOGCTL_ROOT";

/// Abstract repository for site-level operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from .blogctl/config.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to .blogctl/config.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Create .blogctl, the posts directory and the tags directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository.
///
/// Holds no state besides the site root and its layout: every question about
/// posts or tags is answered by looking at the filesystem again.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl FileSystemRepository {
    /// Create a repository with the default layout
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository {
            root,
            config: SiteConfig::default(),
        }
    }

    /// Create a repository using the layout stored under `root`
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = SiteConfig::load_from_dir(&root)?;
        Ok(FileSystemRepository { root, config })
    }

    /// Discover the site root.
    /// First checks BLOGCTL_ROOT environment variable, then walks up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::is_site_root(&path) {
                return Self::open(path);
            } else {
                return Err(BlogError::Config(format!(
                    "{} is set to '{}' but it is not a blog directory. \
                    Run 'blogctl init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::is_site_root(&current) {
                debug!("Using site root {}", current.display());
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BlogError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    /// A site root carries a .blogctl directory or a default posts directory
    fn is_site_root(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir() || path.join(SiteConfig::default().posts_dir).is_dir()
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.config.posts_dir)
    }

    pub fn tags_dir(&self) -> PathBuf {
        self.root.join(&self.config.tags_dir)
    }

    fn tag_dir(&self, tag: &Tag) -> PathBuf {
        self.tags_dir().join(tag.dir_name())
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(BlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        self.save_config(&self.config)?;
        fs::create_dir_all(self.posts_dir())?;
        fs::create_dir_all(self.tags_dir())?;
        Ok(())
    }
}

// Post file operations
impl FileSystemRepository {
    /// Path of a post file as shown to the user (`_posts/<filename>`)
    pub fn post_display_path(&self, filename: &str) -> String {
        format!("{}/{}", self.config.posts_dir, filename)
    }

    /// List the name of every regular file directly inside the posts
    /// directory, sorted. A missing posts directory holds no posts; any other
    /// read failure is returned.
    pub fn list_posts(&self) -> Result<Vec<String>> {
        let posts_dir = self.posts_dir();
        if !posts_dir.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&posts_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut posts = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| BlogError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                posts.push(name.to_string());
            }
        }

        Ok(posts)
    }

    /// Every post file matching `*-<slug>.md`, in filename order
    pub fn find_posts(&self, post: &Post) -> Result<Vec<String>> {
        let mut posts = self.list_posts()?;
        posts.retain(|filename| post.matches_filename(filename));
        Ok(posts)
    }

    /// Write a post file, replacing any file of the same name.
    /// The posts directory must already exist.
    pub fn write_post(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.posts_dir().join(filename);
        debug!("Writing {}", path.display());
        fs::write(&path, content).map_err(BlogError::Io)
    }

    pub fn remove_post(&self, filename: &str) -> Result<()> {
        let path = self.posts_dir().join(filename);
        debug!("Removing {}", path.display());
        fs::remove_file(&path).map_err(BlogError::Io)
    }

    /// Move a post file within the posts directory.
    /// An existing destination is replaced.
    pub fn move_post(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.posts_dir().join(from);
        let to_path = self.posts_dir().join(to);
        debug!("Moving {} to {}", from_path.display(), to_path.display());
        fs::rename(from_path, to_path).map_err(BlogError::Io)
    }
}

// Tag directory operations
impl FileSystemRepository {
    pub fn tag_exists(&self, tag: &Tag) -> bool {
        self.tag_dir(tag).is_dir()
    }

    /// Create the directory for `tag`. The tags directory must already exist.
    pub fn create_tag_dir(&self, tag: &Tag) -> Result<()> {
        let path = self.tag_dir(tag);
        debug!("Creating {}", path.display());
        fs::create_dir(&path).map_err(BlogError::Io)
    }

    pub fn write_tag_index(&self, tag: &Tag, content: &str) -> Result<()> {
        let path = self.tag_dir(tag).join(&self.config.tag_index);
        fs::write(&path, content).map_err(BlogError::Io)
    }

    /// Remove the directory for `tag` and everything inside it
    pub fn remove_tag_dir(&self, tag: &Tag) -> Result<()> {
        let path = self.tag_dir(tag);
        debug!("Removing {}", path.display());
        fs::remove_dir_all(&path).map_err(BlogError::Io)
    }
}
