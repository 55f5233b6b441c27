//! CLI command definitions

use crate::error::{BlogError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogctl")]
#[command(about = "Create, rename and delete blog posts and tag pages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a post and any tag pages it references
    New {
        /// Post title
        title: String,

        /// Tag names (repeat the flag or separate with commas)
        #[arg(short, long = "tags", value_delimiter = ',')]
        tags: Vec<String>,

        /// Date stamped into the filename (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete every post file matching a title
    Delete {
        /// Post title
        title: String,
    },

    /// Rename every post file matching a title
    Rename {
        /// Current post title
        old_title: String,

        /// New post title
        new_title: String,

        /// Date stamped into the new filename (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Check whether a post (or, with --tag, a tag) exists
    Exists {
        /// Post title or tag name
        name: String,

        /// Look up a tag instead of a post
        #[arg(long)]
        tag: bool,
    },

    /// Manage tag pages
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Create a tag page (no-op if it already exists)
    New {
        /// Tag name
        name: String,
    },

    /// Remove a tag page and everything in its directory
    Delete {
        /// Tag name
        name: String,
    },
}

/// Parse a `--date` argument
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| BlogError::InvalidDate(input.to_string()))
}
