//! The kinds of data the pipeline resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages with a vernacular-name chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Estonian.
    Et,
    /// Finnish.
    Fi,
    /// Swedish.
    Sv,
    /// English.
    En,
}

impl Language {
    /// Every supported language, in response order.
    pub const ALL: [Language; 4] = [Language::Et, Language::Fi, Language::Sv, Language::En];

    /// ISO 639-1 code (`"et"`, `"fi"`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::Et => "et",
            Language::Fi => "fi",
            Language::Sv => "sv",
            Language::En => "en",
        }
    }

    /// ISO 639-2 code (`"est"`, `"fin"`, ...), as used by taxonomic backbones.
    #[must_use]
    pub const fn iso639_2(self) -> &'static str {
        match self {
            Language::Et => "est",
            Language::Fi => "fin",
            Language::Sv => "swe",
            Language::En => "eng",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What is being resolved. Selects the provider chain, the
/// normalization rules and the cache TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "language", rename_all = "snake_case")]
pub enum LookupField {
    /// Free-text description of the taxon.
    Description,
    /// Common name in the given language.
    VernacularName(Language),
    /// Candidate taxon names for autocomplete.
    SuggestionList,
}

impl LookupField {
    /// Returns true for fields whose values are prose or names (not lists).
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, LookupField::SuggestionList)
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupField::Description => f.write_str("description"),
            LookupField::VernacularName(lang) => write!(f, "vernacular:{lang}"),
            LookupField::SuggestionList => f.write_str("suggestions"),
        }
    }
}
