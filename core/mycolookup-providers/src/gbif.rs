//! GBIF species API.
//!
//! Lookups are two-step: the name is matched against the backbone to get a
//! usage key, and the key is used to fetch descriptions or vernacular names.

use crate::error::FetchResult;
use crate::http::get_json;
use crate::provider::{absorb, name_list, Provider};
use async_trait::async_trait;
use mycolookup_text::{accept_prose, capitalize, normalize, MIN_PROSE_CHARS};
use mycolookup_types::{Language, LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GBIF endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbifConfig {
    /// Base URL (e.g. `https://api.gbif.org`).
    pub base_url: String,
    /// Maximum names requested from the suggest endpoint.
    pub suggest_limit: usize,
}

impl Default for GbifConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gbif.org".to_string(),
            suggest_limit: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeciesMatch {
    usage_key: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Description {
    description: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VernacularName {
    vernacular_name: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Suggestion {
    canonical_name: Option<String>,
    scientific_name: Option<String>,
    kingdom: Option<String>,
}

/// GBIF backbone taxonomy.
pub struct Gbif {
    client: Client,
    config: GbifConfig,
}

impl Gbif {
    /// Creates the provider.
    pub fn new(client: Client, config: GbifConfig) -> Self {
        Self { client, config }
    }

    async fn usage_key(&self, query: &TaxonQuery) -> FetchResult<Option<u64>> {
        let name = query.to_string();
        let request = self
            .client
            .get(format!("{}/v1/species/match", self.config.base_url))
            .query(&[("name", name.as_str())]);

        let key = get_json::<SpeciesMatch>(request)
            .await?
            .and_then(|m| m.usage_key);
        debug!(%query, ?key, "GBIF match");
        Ok(key)
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let Some(key) = self.usage_key(query).await? else {
            return Ok(None);
        };

        let request = self
            .client
            .get(format!("{}/v1/species/{key}/descriptions", self.config.base_url));
        let Some(page) = get_json::<Page<Description>>(request).await? else {
            return Ok(None);
        };

        Ok(page
            .results
            .into_iter()
            .filter(|d| matches!(d.language.as_deref(), Some("eng" | "en")))
            .filter_map(|d| d.description)
            .find_map(|text| accept_prose(&text, MIN_PROSE_CHARS))
            .map(ResolvedValue::Text))
    }

    async fn fetch_vernacular(
        &self,
        language: Language,
        query: &TaxonQuery,
    ) -> FetchResult<Option<ResolvedValue>> {
        let Some(key) = self.usage_key(query).await? else {
            return Ok(None);
        };

        let request = self
            .client
            .get(format!("{}/v1/species/{key}/vernacularNames", self.config.base_url))
            .query(&[("limit", "100")]);
        let Some(page) = get_json::<Page<VernacularName>>(request).await? else {
            return Ok(None);
        };

        Ok(page
            .results
            .into_iter()
            .filter(|v| v.language.as_deref() == Some(language.iso639_2()))
            .filter_map(|v| v.vernacular_name)
            .map(|name| capitalize(&normalize(&name)))
            .find(|name| !name.is_empty())
            .map(ResolvedValue::Text))
    }

    async fn fetch_suggestions(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let q = query.to_string();
        let limit = self.config.suggest_limit.to_string();
        let request = self
            .client
            .get(format!("{}/v1/species/suggest", self.config.base_url))
            .query(&[("q", q.as_str()), ("limit", limit.as_str())]);

        let Some(suggestions) = get_json::<Vec<Suggestion>>(request).await? else {
            return Ok(None);
        };

        let names = suggestions
            .into_iter()
            .filter(|s| {
                s.kingdom
                    .as_deref()
                    .is_some_and(|k| k.eq_ignore_ascii_case("fungi"))
            })
            .filter_map(|s| s.canonical_name.or(s.scientific_name))
            .collect();

        Ok(name_list(names))
    }
}

#[async_trait]
impl Provider for Gbif {
    fn name(&self) -> &'static str {
        "gbif"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        let outcome = match field {
            LookupField::Description => self.fetch_description(query).await,
            LookupField::VernacularName(language) => self.fetch_vernacular(language, query).await,
            LookupField::SuggestionList => self.fetch_suggestions(query).await,
        };
        absorb(self.name(), field, query, outcome)
    }
}
