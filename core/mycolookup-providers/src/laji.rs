//! laji.fi (Finnish Biodiversity Information Facility) taxa API.
//!
//! Every request carries an access token supplied through configuration.

use crate::error::{FetchResult, ProviderError};
use crate::http::get_json;
use crate::provider::{absorb, name_list, Provider};
use async_trait::async_trait;
use mycolookup_text::{capitalize, normalize};
use mycolookup_types::{Language, LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// laji.fi endpoint settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct LajiConfig {
    /// Base URL (e.g. `https://api.laji.fi`).
    pub base_url: String,
    /// API access token. Without one the provider reports no data.
    pub access_token: Option<String>,
    /// Checklist the taxa query is scoped to.
    pub taxonomy_id: String,
    /// Maximum names requested for suggestions.
    pub suggest_limit: usize,
}

impl Default for LajiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.laji.fi".to_string(),
            access_token: None,
            taxonomy_id: "MX.37600".to_string(),
            suggest_limit: 10,
        }
    }
}

impl fmt::Debug for LajiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LajiConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("taxonomy_id", &self.taxonomy_id)
            .field("suggest_limit", &self.suggest_limit)
            .finish()
    }
}

/// The taxa endpoints answer either with a bare array or a `results` page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaxonList {
    Bare(Vec<LajiTaxon>),
    Paged {
        #[serde(default)]
        results: Vec<LajiTaxon>,
    },
}

impl TaxonList {
    fn into_vec(self) -> Vec<LajiTaxon> {
        match self {
            TaxonList::Bare(taxa) | TaxonList::Paged { results: taxa } => taxa,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LajiTaxon {
    scientific_name: Option<String>,
    #[serde(default)]
    vernacular_name: HashMap<String, String>,
}

impl LajiTaxon {
    fn vernacular(&self, language: Language) -> Option<String> {
        self.vernacular_name
            .get(language.code())
            .map(|name| capitalize(&normalize(name)))
            .filter(|name| !name.is_empty())
    }
}

/// laji.fi taxonomy: Finnish and Swedish names, fungus suggestions.
pub struct LajiFi {
    client: Client,
    config: LajiConfig,
}

impl LajiFi {
    /// Creates the provider.
    pub fn new(client: Client, config: LajiConfig) -> Self {
        Self { client, config }
    }

    /// Returns true if an access token is configured.
    pub fn has_credentials(&self) -> bool {
        self.config.access_token.is_some()
    }

    fn authorized(&self, request: RequestBuilder) -> FetchResult<RequestBuilder> {
        let token = self
            .config
            .access_token
            .as_deref()
            .ok_or(ProviderError::MissingCredential("laji.fi access token"))?;
        Ok(request.query(&[("access_token", token)]))
    }

    async fn fetch_vernacular(
        &self,
        language: Language,
        query: &TaxonQuery,
    ) -> FetchResult<Option<ResolvedValue>> {
        let name = query.to_string();

        // Checklist query first: pick the exact scientific-name match.
        let request = self.authorized(
            self.client
                .get(format!("{}/v0/taxa", self.config.base_url))
                .query(&[
                    ("taxonomyId", self.config.taxonomy_id.as_str()),
                    ("lang", "multi"),
                    ("langFallback", "true"),
                    ("maxLevel", "4"),
                    ("query", name.as_str()),
                ]),
        )?;
        let exact = get_json::<TaxonList>(request)
            .await?
            .map(TaxonList::into_vec)
            .unwrap_or_default()
            .into_iter()
            .find(|t| {
                t.scientific_name
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(&name))
            });
        if let Some(taxon) = exact {
            return Ok(taxon.vernacular(language).map(ResolvedValue::Text));
        }

        // Then free search: take the best-ranked hit.
        let request = self.authorized(
            self.client
                .get(format!("{}/v0/taxa/search", self.config.base_url))
                .query(&[("query", name.as_str()), ("lang", "multi")]),
        )?;
        Ok(get_json::<TaxonList>(request)
            .await?
            .map(TaxonList::into_vec)
            .unwrap_or_default()
            .first()
            .and_then(|t| t.vernacular(language))
            .map(ResolvedValue::Text))
    }

    async fn fetch_suggestions(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let q = query.to_string();
        let limit = self.config.suggest_limit.to_string();
        let request = self.authorized(
            self.client
                .get(format!("{}/v0/taxa/search", self.config.base_url))
                .query(&[
                    ("query", q.as_str()),
                    ("limit", limit.as_str()),
                    ("matchType", "partial"),
                    ("onlyFungi", "true"),
                    ("includePayload", "false"),
                ]),
        )?;

        let names = get_json::<TaxonList>(request)
            .await?
            .map(TaxonList::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| t.scientific_name)
            .collect();

        Ok(name_list(names))
    }
}

#[async_trait]
impl Provider for LajiFi {
    fn name(&self) -> &'static str {
        "laji.fi"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        let outcome = match field {
            LookupField::VernacularName(language @ (Language::Fi | Language::Sv)) => {
                self.fetch_vernacular(language, query).await
            }
            LookupField::SuggestionList => self.fetch_suggestions(query).await,
            _ => return ProviderResult::Absent,
        };
        absorb(self.name(), field, query, outcome)
    }
}
