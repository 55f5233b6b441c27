//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_date, Cli, Commands, TagCommands};
pub use output::{format_config_list, format_exists, ConsoleReporter};
