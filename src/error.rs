//! Error types for blogctl

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogctl
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Not a blog directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Invalid name: '{0}' does not produce a usable slug")]
    InvalidSlug(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::NotSiteDirectory(_) => 2,
            BlogError::InvalidSlug(_) => 3,
            BlogError::InvalidDate(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::NotSiteDirectory(path) => {
                format!(
                    "Not a blog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'blogctl init' in this directory to set up a new site\n\
                    • Navigate to a directory containing _posts/\n\
                    • Set BLOGCTL_ROOT environment variable to your site path",
                    path.display()
                )
            }
            BlogError::InvalidSlug(input) => {
                format!(
                    "Invalid name: '{}'\n\n\
                    Titles and tag names must contain at least one letter or digit.\n\
                    Examples:\n\
                    blogctl new \"My First Post\" --tags intro\n\
                    blogctl tag new \"Ruby Tips\"",
                    input
                )
            }
            BlogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: blogctl new \"Hello World\" --date 2024-03-05",
                    input
                )
            }
            BlogError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Example: blogctl config posts_dir _posts",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
