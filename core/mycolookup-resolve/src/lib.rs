//! Multi-source resolution for mycolookup.
//!
//! A [`Resolver`] owns a [`ProviderTable`] (one ordered provider chain per
//! field) and a [`TtlCache`]. Each lookup goes:
//!
//! ```text
//! TaxonQuery -> cache -> provider 1 -> provider 2 -> ... -> fallback -> cache
//! ```
//!
//! Providers are tried one at a time. The first answer that passes
//! normalization and the quality gate wins.

mod cache;
mod fallback;
mod resolver;
mod table;

pub use cache::{CacheConfig, CacheEntry, CacheKey, Clock, SystemClock, TtlCache};
pub use fallback::{fallback, fallback_description, DESCRIPTION_TEMPLATES};
pub use resolver::{DescriptionResponse, Resolver, ResolverConfig, VernacularNames};
pub use table::{ProviderTable, ProvidersConfig};
