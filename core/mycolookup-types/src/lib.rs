//! Core type definitions for mycolookup.
//!
//! This crate defines the vocabulary shared by providers, the resolution
//! pipeline and the HTTP surface:
//! - [`TaxonQuery`], the canonical form of a user-supplied taxon name
//! - [`LookupField`] and [`Language`], the kinds of data being resolved
//! - [`ProviderResult`], a provider's answer: found data or absence
//! - [`Resolution`], the pipeline's final answer and where it came from

mod field;
mod query;
mod result;

pub use field::{Language, LookupField};
pub use query::TaxonQuery;
pub use result::{ProviderResult, Resolution, ResolvedValue, Source};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be reported to a caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The taxon name was missing or blank.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
