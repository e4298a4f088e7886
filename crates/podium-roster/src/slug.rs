//! ASCII shortname derivation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a safe shortname slug from a display name.
///
/// The input is NFKD-decomposed so accented letters split into a base letter
/// plus combining marks; the marks and any remaining non-ASCII characters are
/// dropped, letters are lowercased, and word separators (spaces, underscores,
/// dashes) collapse into single dashes with none leading or trailing.
///
/// Pure and total: the same input always yields the same slug, empty input
/// yields the empty string, and no input panics.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
        }
        // anything else (punctuation, non-ASCII) is dropped
    }

    slug
}
