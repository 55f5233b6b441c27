//! Domain layer - Content entities and naming rules

pub mod events;
pub mod post;
pub mod slug;
pub mod tag;
pub mod template;

pub use events::{ContentEvent, RecordingReporter, Reporter};
pub use post::Post;
pub use self::slug::slugify;
pub use tag::Tag;
pub use template::{load_template, Template, POST_TEMPLATE_NAME, TAG_INDEX_TEMPLATE_NAME};
