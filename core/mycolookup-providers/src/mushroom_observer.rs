//! Mushroom Observer names API.

use crate::error::FetchResult;
use crate::http::get_json;
use crate::provider::{absorb, Provider};
use async_trait::async_trait;
use mycolookup_text::{accept_prose, MIN_PROSE_CHARS};
use mycolookup_types::{LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Mushroom Observer endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MushroomObserverConfig {
    /// Base URL (e.g. `https://mushroomobserver.org`).
    pub base_url: String,
}

impl Default for MushroomObserverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mushroomobserver.org".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NameResults {
    #[serde(default)]
    results: Vec<NameRecord>,
}

#[derive(Debug, Deserialize)]
struct NameRecord {
    #[serde(default)]
    descriptions: Vec<NameDescription>,
}

#[derive(Debug, Deserialize)]
struct NameDescription {
    general_description: Option<String>,
    diagnostic_description: Option<String>,
}

/// Mushroom Observer name descriptions.
pub struct MushroomObserver {
    client: Client,
    config: MushroomObserverConfig,
}

impl MushroomObserver {
    /// Creates the provider.
    pub fn new(client: Client, config: MushroomObserverConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let name = query.to_string();
        let request = self
            .client
            .get(format!("{}/api2/names", self.config.base_url))
            .query(&[("name", name.as_str()), ("detail", "high"), ("format", "json")]);

        let Some(names) = get_json::<NameResults>(request).await? else {
            return Ok(None);
        };

        // General descriptions are preferred over diagnostic ones.
        let descriptions: Vec<NameDescription> = names
            .results
            .into_iter()
            .flat_map(|record| record.descriptions)
            .collect();
        let general = descriptions
            .iter()
            .filter_map(|d| d.general_description.as_deref());
        let diagnostic = descriptions
            .iter()
            .filter_map(|d| d.diagnostic_description.as_deref());

        Ok(general
            .chain(diagnostic)
            .find_map(|text| accept_prose(text, MIN_PROSE_CHARS))
            .map(ResolvedValue::Text))
    }
}

#[async_trait]
impl Provider for MushroomObserver {
    fn name(&self) -> &'static str {
        "mushroom-observer"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        match field {
            LookupField::Description => {
                absorb(self.name(), field, query, self.fetch_description(query).await)
            }
            _ => ProviderResult::Absent,
        }
    }
}
