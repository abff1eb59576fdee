//! Provider answers and resolved values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A provider's answer for one field and query.
///
/// Providers never report errors: transport failures, malformed payloads
/// and sub-threshold text all collapse into [`ProviderResult::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult {
    /// Usable data, tagged with the provider that produced it.
    Found {
        value: ResolvedValue,
        provider: &'static str,
    },
    /// No usable data.
    Absent,
}

impl ProviderResult {
    /// Shorthand for a textual hit.
    #[must_use]
    pub fn text(provider: &'static str, text: impl Into<String>) -> Self {
        ProviderResult::Found {
            value: ResolvedValue::Text(text.into()),
            provider,
        }
    }

    /// Shorthand for a name-list hit.
    #[must_use]
    pub fn names(provider: &'static str, names: Vec<String>) -> Self {
        ProviderResult::Found {
            value: ResolvedValue::Names(names),
            provider,
        }
    }

    /// Builds a textual hit from an optional value.
    #[must_use]
    pub fn from_text(provider: &'static str, text: Option<String>) -> Self {
        text.map_or(ProviderResult::Absent, |t| Self::text(provider, t))
    }

    /// Builds a list hit, or `Absent` when the list is empty.
    #[must_use]
    pub fn from_names(provider: &'static str, names: Vec<String>) -> Self {
        if names.is_empty() {
            ProviderResult::Absent
        } else {
            Self::names(provider, names)
        }
    }

    /// Returns true for `Absent`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, ProviderResult::Absent)
    }
}

/// A resolved payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// A description or vernacular name.
    Text(String),
    /// A suggestion list.
    Names(Vec<String>),
}

impl ResolvedValue {
    /// Returns the text, or `""` for a list.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            ResolvedValue::Text(text) => text,
            ResolvedValue::Names(_) => "",
        }
    }

    /// Consumes the value into its name list (empty for text).
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        match self {
            ResolvedValue::Names(names) => names,
            ResolvedValue::Text(_) => Vec::new(),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A provider hit.
    Provider(&'static str),
    /// No provider had data; a generated placeholder was used.
    Fallback,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Provider(name) => f.write_str(name),
            Source::Fallback => f.write_str("fallback"),
        }
    }
}

/// The pipeline's final answer for a field and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: ResolvedValue,
    pub source: Source,
}

impl Resolution {
    /// Returns true if the value was generated rather than found.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}
