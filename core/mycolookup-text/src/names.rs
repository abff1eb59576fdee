//! Name helpers: capitalization and suggestion shaping.

use regex_lite::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Capitalized genus, a single space, lowercase epithet (hyphens allowed,
// e.g. "Auricularia auricula-judae").
static BINOMIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+ [a-z][a-z-]*$").expect("binomial pattern is valid")
});

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if `name` looks like a two-token scientific name.
#[must_use]
pub fn is_binomial(name: &str) -> bool {
    BINOMIAL.is_match(name)
}

/// Turns raw candidate names into a suggestion list.
///
/// Names are trimmed and blanks dropped. With `binomial_only`, anything
/// that does not look like `Genus epithet` is discarded. The result is
/// deduplicated (exact, case-sensitive), sorted ascending and capped at `limit`.
#[must_use]
pub fn shape_suggestions<I>(names: I, binomial_only: bool, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| !binomial_only || is_binomial(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(limit)
        .collect()
}
