//! URL slugification.
//!
//! Converts titles and file stems to URL-safe slugs.

use deunicode::deunicode;

/// Convert text to a URL-safe slug.
///
/// ASCII-folds via transliteration, lowercases, and collapses every run of
/// non-alphanumeric characters into a single `-` with no leading or
/// trailing separator.
pub fn slugify(text: &str) -> String {
    let folded = deunicode(text);
    let mut slug = String::with_capacity(folded.len());
    let mut pending_sep = false;

    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}
