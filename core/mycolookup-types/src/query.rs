//! Canonical taxon names.

use crate::Error;
use mycolookup_text::capitalize;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A canonicalized species name: capitalized genus, lowercase epithet.
///
/// Built once from raw user text and never mutated. Its string form
/// (`"Genus epithet"`, or just `"Genus"`) is used both as provider input
/// and as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxonQuery {
    genus: String,
    epithet: String,
}

impl TaxonQuery {
    /// Formats raw user input into a canonical query.
    ///
    /// The input is split at its first whitespace run. The first token is
    /// capitalized (first character only) and becomes the genus; the remaining
    /// tokens are lowercased and joined with single spaces as the epithet.
    ///
    /// Blank input is rejected with [`Error::InvalidQuery`].
    pub fn format(raw: &str) -> Result<Self, Error> {
        let mut tokens = raw.split_whitespace();
        let genus = tokens
            .next()
            .map(capitalize)
            .ok_or_else(|| Error::InvalidQuery("taxon name is required".to_string()))?;
        let epithet = tokens.collect::<Vec<_>>().join(" ").to_lowercase();

        Ok(Self { genus, epithet })
    }

    /// Returns the capitalized genus.
    #[must_use]
    pub fn genus(&self) -> &str {
        &self.genus
    }

    /// Returns the lowercase epithet, or `None` for a bare genus.
    #[must_use]
    pub fn epithet(&self) -> Option<&str> {
        (!self.epithet.is_empty()).then_some(self.epithet.as_str())
    }

    /// Returns true if the query names a genus only.
    #[must_use]
    pub fn is_genus_only(&self) -> bool {
        self.epithet.is_empty()
    }
}

impl fmt::Display for TaxonQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epithet.is_empty() {
            write!(f, "{}", self.genus)
        } else {
            write!(f, "{} {}", self.genus, self.epithet)
        }
    }
}

impl FromStr for TaxonQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::format(s)
    }
}

impl Serialize for TaxonQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
