//! Prose normalization: markup stripping and sentence truncation.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Maximum number of sentences kept in a prose result.
pub const MAX_SENTENCES: usize = 3;

/// Prose shorter than this (in characters) counts as no data.
pub const MIN_PROSE_CHARS: usize = 50;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s*").expect("sentence pattern is valid"));

/// Removes every `<...>` tag from the input.
#[must_use]
pub fn strip_tags(raw: &str) -> String {
    TAG.replace_all(raw, "").into_owned()
}

/// Keeps at most [`MAX_SENTENCES`] sentences.
///
/// A sentence ends at any run of `.`, `!` or `?`. Empty fragments are
/// discarded before counting. Text that already fits is returned as is;
/// longer text is rejoined with `". "` and closed with a period.
#[must_use]
pub fn truncate_sentences(text: &str) -> String {
    let fragments: Vec<&str> = SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.len() <= MAX_SENTENCES {
        return text.to_string();
    }

    format!("{}.", fragments[..MAX_SENTENCES].join(". "))
}

/// Strips markup, trims, and truncates to [`MAX_SENTENCES`].
///
/// Casing is left untouched; names go through [`crate::capitalize`] separately.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let stripped = strip_tags(raw);
    truncate_sentences(stripped.trim())
}

/// Returns true when `text` is at least `min_chars` characters long.
#[must_use]
pub fn passes_quality_gate(text: &str, min_chars: usize) -> bool {
    text.chars().count() >= min_chars
}

/// Normalizes `raw` and keeps it only if it clears the quality gate.
#[must_use]
pub fn accept_prose(raw: &str, min_chars: usize) -> Option<String> {
    let text = normalize(raw);
    passes_quality_gate(&text, min_chars).then_some(text)
}
