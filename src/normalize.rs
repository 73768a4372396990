//! Text normalization for similarity hashing.
//!
//! [`collapse_text`] simplifies text before n-gram extraction so that
//! near-identical inputs map to near-identical feature sets: accents,
//! joining marks and structural punctuation disappear while word
//! boundaries and sentence punctuation survive.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Returns true for categories removed during normalization: all control
/// and mark categories plus every punctuation class except `Po` (which
/// carries sentence-level meaning: `.`, `,`, `!`, `?`).
fn is_filtered(ch: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        Control
            | Format
            | Unassigned
            | PrivateUse
            | Surrogate
            | SpacingMark
            | EnclosingMark
            | NonspacingMark
            | ConnectorPunctuation
            | DashPunctuation
            | ClosePunctuation
            | FinalPunctuation
            | InitialPunctuation
            | OpenPunctuation
    )
}

/// Normalize and simplify text for similarity hashing.
///
/// - decompose with NFD,
/// - drop filtered categories (whitespace is always kept at this stage so
///   that line breaks still separate words),
/// - collapse whitespace runs to single spaces and trim the ends,
/// - recompose with NFKC.
pub fn collapse_text(text: &str) -> String {
    let filtered: String = text
        .nfd()
        .filter(|&ch| ch.is_whitespace() || !is_filtered(ch))
        .collect();
    let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.nfkc().collect()
}

/// Trim `text` so that its UTF-8 encoding does not exceed `nbytes`, then
/// strip surrounding whitespace. Never splits a code point.
pub fn trim_text(text: &str, nbytes: usize) -> &str {
    let mut end = nbytes.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].trim()
}
