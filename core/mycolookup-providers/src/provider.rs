//! The provider abstraction.
//!
//! A provider is one external lookup strategy. Given a field and a canonical
//! query it returns usable data or absence; it never returns an error.

use crate::error::FetchResult;
use async_trait::async_trait;
use mycolookup_text::shape_suggestions;
use mycolookup_types::{LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use tracing::{debug, warn};

/// A single external data source.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short, stable name used as the provenance tag and in logs.
    fn name(&self) -> &'static str;

    /// Returns true if this provider's suggestion names come from free
    /// text (page titles) rather than an explicit scientific-name field.
    /// The pipeline keeps only binomial-looking names from such providers.
    fn free_text_names(&self) -> bool {
        false
    }

    /// Looks up `field` for `query`.
    ///
    /// Fields the provider does not serve yield `Absent`.
    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult;
}

/// Converts a fetch outcome into a [`ProviderResult`], logging failures.
pub(crate) fn absorb(
    provider: &'static str,
    field: LookupField,
    query: &TaxonQuery,
    outcome: FetchResult<Option<ResolvedValue>>,
) -> ProviderResult {
    match outcome {
        Ok(Some(value)) => ProviderResult::Found { value, provider },
        Ok(None) => {
            debug!(provider, %field, %query, "no data");
            ProviderResult::Absent
        }
        Err(e) if e.is_rate_limited() => {
            warn!(provider, %field, %query, "rate limited");
            ProviderResult::Absent
        }
        Err(e) => {
            warn!(provider, %field, %query, error = %e, "lookup failed");
            ProviderResult::Absent
        }
    }
}

/// Wraps a candidate name list, dropping it when empty.
pub(crate) fn name_list(names: Vec<String>) -> Option<ResolvedValue> {
    let names = shape_suggestions(names, false, usize::MAX);
    (!names.is_empty()).then_some(ResolvedValue::Names(names))
}
