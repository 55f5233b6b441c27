//! Progress notices emitted by content operations

use std::cell::RefCell;
use std::fmt;

/// Something that happened on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    PostCreated { filename: String },
    PostDeleted { path: String },
    PostRenamed { from: String, to: String },
    TagCreated { slug: String },
    TagRemoved { slug: String },
}

impl fmt::Display for ContentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentEvent::PostCreated { filename } => write!(f, "Created post '{}'", filename),
            ContentEvent::PostDeleted { path } => write!(f, "Deleting post: {}", path),
            ContentEvent::PostRenamed { from, to } => {
                write!(f, "Renaming post: {} to {}", from, to)
            }
            ContentEvent::TagCreated { slug } => write!(f, "Creating new tag: {}", slug),
            ContentEvent::TagRemoved { slug } => write!(f, "Removing tag: {}", slug),
        }
    }
}

/// Sink for content events
pub trait Reporter {
    fn report(&self, event: &ContentEvent);
}

/// Discards every event
impl Reporter for () {
    fn report(&self, _event: &ContentEvent) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &ContentEvent) {
        (**self).report(event)
    }
}

/// Keeps every event in order, for inspection after the fact
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<ContentEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ContentEvent> {
        self.events.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.to_string()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &ContentEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
