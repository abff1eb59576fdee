//! The resolution pipeline and its public facade.

use crate::cache::TtlCache;
use crate::fallback::fallback;
use crate::table::ProviderTable;
use mycolookup_providers::Provider;
use mycolookup_text::{accept_prose, capitalize, normalize, shape_suggestions, MIN_PROSE_CHARS};
use mycolookup_types::{
    Language, LookupField, ProviderResult, Resolution, ResolvedValue, Result, Source, TaxonQuery,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Limits applied to suggestion lookups.
///
/// Descriptions are gated at [`MIN_PROSE_CHARS`], the same threshold the
/// providers use when picking a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum names returned by [`Resolver::suggest`].
    pub max_suggestions: usize,
    /// Suggestion prefixes shorter than this return nothing.
    pub min_suggest_chars: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            min_suggest_chars: 3,
        }
    }
}

/// Response body for a description lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

/// Vernacular names for one taxon. Unresolved languages are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VernacularNames {
    pub latin_name: String,
    pub et: String,
    pub fi: String,
    pub sv: String,
    pub en: String,
}

/// Resolves fields through ordered provider chains with caching.
///
/// Resolution never fails: every chain ends in a generated fallback.
pub struct Resolver {
    table: ProviderTable,
    cache: TtlCache,
    config: ResolverConfig,
}

impl Resolver {
    /// Creates a resolver over `table`, memoizing into `cache`.
    pub fn new(table: ProviderTable, cache: TtlCache, config: ResolverConfig) -> Self {
        Self {
            table,
            cache,
            config,
        }
    }

    /// Returns the resolver's cache.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// Returns the provider table.
    pub fn table(&self) -> &ProviderTable {
        &self.table
    }

    /// Resolves `field` for `query`.
    ///
    /// A live cache entry is returned as is. Otherwise providers are tried
    /// strictly in order and the first answer that survives normalization
    /// wins; if none does, the field's fallback is used. Either outcome is
    /// written to the cache.
    pub async fn resolve(&self, field: LookupField, query: &TaxonQuery) -> Resolution {
        if let Some(cached) = self.cache.get(field, query).await {
            debug!(%field, %query, source = %cached.source, "cache hit");
            return cached;
        }

        let resolution = match self.first_accepted(field, query).await {
            Some((value, provider)) => Resolution {
                value,
                source: Source::Provider(provider),
            },
            None => Resolution {
                value: fallback(field, query),
                source: Source::Fallback,
            },
        };

        info!(%field, %query, source = %resolution.source, "resolved");
        self.cache.set(field, query, resolution.clone()).await;
        resolution
    }

    async fn first_accepted(
        &self,
        field: LookupField,
        query: &TaxonQuery,
    ) -> Option<(ResolvedValue, &'static str)> {
        for provider in self.table.chain(field) {
            debug!(provider = provider.name(), %field, %query, "trying provider");
            match provider.lookup(field, query).await {
                ProviderResult::Found { value, provider: name } => {
                    match self.accept(field, provider.as_ref(), value) {
                        Some(value) => return Some((value, name)),
                        None => debug!(provider = name, %field, %query, "rejected by quality gate"),
                    }
                }
                ProviderResult::Absent => {}
            }
        }
        None
    }

    /// Normalizes a provider answer, or rejects it.
    fn accept(
        &self,
        field: LookupField,
        provider: &dyn Provider,
        value: ResolvedValue,
    ) -> Option<ResolvedValue> {
        match (field, value) {
            (LookupField::Description, ResolvedValue::Text(text)) => {
                accept_prose(&text, MIN_PROSE_CHARS).map(ResolvedValue::Text)
            }
            (LookupField::VernacularName(_), ResolvedValue::Text(text)) => {
                let name = capitalize(&normalize(&text));
                (!name.is_empty()).then_some(ResolvedValue::Text(name))
            }
            (LookupField::SuggestionList, ResolvedValue::Names(names)) => {
                let names = shape_suggestions(
                    names,
                    provider.free_text_names(),
                    self.config.max_suggestions,
                );
                (!names.is_empty()).then_some(ResolvedValue::Names(names))
            }
            _ => None,
        }
    }

    /// Resolves the description for a raw taxon name.
    pub async fn describe(&self, raw: &str) -> Result<DescriptionResponse> {
        let query = TaxonQuery::format(raw)?;
        let resolution = self.resolve(LookupField::Description, &query).await;
        Ok(DescriptionResponse {
            description: resolution.value.as_text().to_string(),
        })
    }

    /// Resolves vernacular names in every supported language.
    ///
    /// The four chains run concurrently; each stays sequential.
    pub async fn vernacular_names(&self, raw: &str) -> Result<VernacularNames> {
        let query = TaxonQuery::format(raw)?;
        let (et, fi, sv, en) = tokio::join!(
            self.resolve(LookupField::VernacularName(Language::Et), &query),
            self.resolve(LookupField::VernacularName(Language::Fi), &query),
            self.resolve(LookupField::VernacularName(Language::Sv), &query),
            self.resolve(LookupField::VernacularName(Language::En), &query),
        );

        Ok(VernacularNames {
            latin_name: query.to_string(),
            et: et.value.as_text().to_string(),
            fi: fi.value.as_text().to_string(),
            sv: sv.value.as_text().to_string(),
            en: en.value.as_text().to_string(),
        })
    }

    /// Suggests taxon names for an autocomplete prefix.
    ///
    /// Prefixes shorter than the configured minimum return nothing without
    /// contacting any provider.
    pub async fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim();
        if prefix.chars().count() < self.config.min_suggest_chars {
            return Vec::new();
        }
        let Ok(query) = TaxonQuery::format(prefix) else {
            return Vec::new();
        };
        self.resolve(LookupField::SuggestionList, &query)
            .await
            .value
            .into_names()
    }
}
