//! iNaturalist taxa API.

use crate::error::FetchResult;
use crate::http::get_json;
use crate::provider::{absorb, name_list, Provider};
use async_trait::async_trait;
use mycolookup_text::{accept_prose, capitalize, normalize, MIN_PROSE_CHARS};
use mycolookup_types::{Language, LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// iNaturalist endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct INaturalistConfig {
    /// Base URL (e.g. `https://api.inaturalist.org`).
    pub base_url: String,
    /// Maximum names requested from autocomplete.
    pub suggest_limit: usize,
}

impl Default for INaturalistConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.inaturalist.org".to_string(),
            suggest_limit: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Taxa {
    #[serde(default)]
    results: Vec<Taxon>,
}

#[derive(Debug, Deserialize)]
struct Taxon {
    id: u64,
    name: String,
    preferred_common_name: Option<String>,
    wikipedia_summary: Option<String>,
    iconic_taxon_name: Option<String>,
}

/// iNaturalist taxa.
pub struct INaturalist {
    client: Client,
    config: INaturalistConfig,
}

impl INaturalist {
    /// Creates the provider.
    pub fn new(client: Client, config: INaturalistConfig) -> Self {
        Self { client, config }
    }

    /// Finds the taxon whose name matches the query exactly (ignoring case).
    async fn find_taxon(&self, query: &TaxonQuery, locale: &str) -> FetchResult<Option<Taxon>> {
        let name = query.to_string();
        let request = self
            .client
            .get(format!("{}/v1/taxa", self.config.base_url))
            .query(&[
                ("q", name.as_str()),
                ("locale", locale),
                ("is_active", "true"),
                ("per_page", "5"),
            ]);

        Ok(get_json::<Taxa>(request).await?.and_then(|taxa| {
            taxa.results
                .into_iter()
                .find(|t| t.name.eq_ignore_ascii_case(&name))
        }))
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let Some(taxon) = self.find_taxon(query, "en").await? else {
            return Ok(None);
        };

        // Search results omit the summary; the detail endpoint carries it.
        let request = self
            .client
            .get(format!("{}/v1/taxa/{}", self.config.base_url, taxon.id));
        let Some(detail) = get_json::<Taxa>(request).await? else {
            return Ok(None);
        };

        Ok(detail
            .results
            .into_iter()
            .filter_map(|t| t.wikipedia_summary)
            .find_map(|summary| accept_prose(&summary, MIN_PROSE_CHARS))
            .map(ResolvedValue::Text))
    }

    async fn fetch_vernacular(
        &self,
        language: Language,
        query: &TaxonQuery,
    ) -> FetchResult<Option<ResolvedValue>> {
        Ok(self
            .find_taxon(query, language.code())
            .await?
            .and_then(|t| t.preferred_common_name)
            .map(|name| capitalize(&normalize(&name)))
            .filter(|name| !name.is_empty())
            .map(ResolvedValue::Text))
    }

    async fn fetch_suggestions(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let q = query.to_string();
        let limit = self.config.suggest_limit.to_string();
        let request = self
            .client
            .get(format!("{}/v1/taxa/autocomplete", self.config.base_url))
            .query(&[("q", q.as_str()), ("per_page", limit.as_str())]);

        let Some(taxa) = get_json::<Taxa>(request).await? else {
            return Ok(None);
        };

        let names = taxa
            .results
            .into_iter()
            .filter(|t| t.iconic_taxon_name.as_deref() == Some("Fungi"))
            .map(|t| t.name)
            .collect();

        Ok(name_list(names))
    }
}

#[async_trait]
impl Provider for INaturalist {
    fn name(&self) -> &'static str {
        "inaturalist"
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
