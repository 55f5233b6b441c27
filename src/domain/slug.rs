//! Title and tag name to filesystem-safe slug

use crate::error::{BlogError, Result};

/// Convert free-form text into a lowercase, hyphenated slug.
///
/// Normalization is delegated to the `slug` crate: non-ASCII characters are
/// transliterated, everything is lowercased and each run of characters other
/// than `[a-z0-9]` collapses to a single `-`, with no leading or trailing `-`.
///
/// Input that normalizes to nothing (empty, whitespace, pure punctuation) is
/// rejected so it can never address `_posts/YYYY-MM-DD-.md` or `tags/`.
pub fn slugify(text: &str) -> Result<String> {
    let slug = ::slug::slugify(text);
    if slug.is_empty() {
        return Err(BlogError::InvalidSlug(text.to_string()));
    }
    Ok(slug)
}
