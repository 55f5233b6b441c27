//! Output formatting utilities

use crate::domain::{ContentEvent, Reporter};
use crate::infrastructure::SiteConfig;

/// Prints each content event on its own line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, event: &ContentEvent) {
        log::debug!("{:?}", event);
        println!("{}", event);
    }
}

/// Format the answer of an existence check
pub fn format_exists(exists: bool) -> &'static str {
    if exists {
        "yes"
    } else {
        "no"
    }
}

/// Format every config entry as `key = value`
pub fn format_config_list(config: &SiteConfig) -> String {
    let mut output = String::new();
    for (key, value) in config.entries() {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}
