//! Wikipedia providers.
//!
//! - [`WikipediaSummary`]: English REST page summary, used for descriptions
//! - [`WikipediaWikitext`]: Estonian article wikitext, mined for the Estonian name
//! - [`WikipediaOpenSearch`]: title search, used as a free-text suggestion source

use crate::error::FetchResult;
use crate::http::{get_json, get_text};
use crate::provider::{absorb, name_list, Provider};
use async_trait::async_trait;
use mycolookup_text::{accept_prose, capitalize, normalize, MIN_PROSE_CHARS};
use mycolookup_types::{Language, LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use regex_lite::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Wikipedia endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// Wiki serving page summaries (e.g. `https://en.wikipedia.org`).
    pub summary_base_url: String,
    /// Wiki whose wikitext names the taxon in Estonian.
    pub wikitext_base_url: String,
    /// Wiki used for title search.
    pub search_base_url: String,
    /// Maximum titles requested from title search.
    pub search_limit: usize,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            summary_base_url: "https://en.wikipedia.org".to_string(),
            wikitext_base_url: "https://et.wikipedia.org".to_string(),
            search_base_url: "https://en.wikipedia.org".to_string(),
            search_limit: 10,
        }
    }
}

fn title_path(query: &TaxonQuery) -> String {
    urlencoding::encode(&query.to_string().replace(' ', "_")).into_owned()
}

// ── Page summary ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(rename = "type")]
    page_type: Option<String>,
    extract: Option<String>,
}

/// English page summary, for descriptions.
pub struct WikipediaSummary {
    client: Client,
    base_url: String,
}

impl WikipediaSummary {
    /// Creates the provider.
    pub fn new(client: Client, config: &WikipediaConfig) -> Self {
        Self {
            client,
            base_url: config.summary_base_url.clone(),
        }
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let url = format!("{}/api/rest_v1/page/summary/{}", self.base_url, title_path(query));
        let Some(summary) = get_json::<PageSummary>(self.client.get(url)).await? else {
            return Ok(None);
        };

        if summary.page_type.as_deref() == Some("disambiguation") {
            return Ok(None);
        }

        Ok(summary
            .extract
            .and_then(|extract| accept_prose(&extract, MIN_PROSE_CHARS))
            .map(ResolvedValue::Text))
    }
}

#[async_trait]
impl Provider for WikipediaSummary {
    fn name(&self) -> &'static str {
        "wikipedia"
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

// ── Article wikitext ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    #[serde(default)]
    pages: HashMap<String, WikiPage>,
}

#[derive(Debug, Deserialize)]
struct WikiPage {
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    #[serde(rename = "*")]
    content: Option<String>,
}

// `#suuna` is the Estonian redirect keyword.
static REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#(?:suuna|redirect)\s*\[\[(.*?)\]\]").expect("redirect pattern is valid")
});

static LEADING_BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^'''([A-ZÕÄÖÜŠŽa-zõäöüšž\s\-]+?)'''").expect("bold pattern is valid")
});

/// Extracts a vernacular name from article wikitext.
///
/// A redirect's target wins (the article lives under its common name);
/// otherwise the bold lead term of the article is used.
pub fn vernacular_from_wikitext(content: &str) -> Option<String> {
    let raw = REDIRECT
        .captures(content)
        .or_else(|| LEADING_BOLD.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())?;

    // Drop section anchors from redirect targets ("Name#Section").
    let name = raw.split('#').next().unwrap_or(raw).trim();
    (!name.is_empty()).then(|| capitalize(name))
}

/// Estonian article wikitext, for the Estonian vernacular name.
pub struct WikipediaWikitext {
    client: Client,
    base_url: String,
}

impl WikipediaWikitext {
    /// Creates the provider.
    pub fn new(client: Client, config: &WikipediaConfig) -> Self {
        Self {
            client,
            base_url: config.wikitext_base_url.clone(),
        }
    }

    async fn fetch_name(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let title = query.to_string();
        let request = self.client.get(format!("{}/w/api.php", self.base_url)).query(&[
            ("action", "query"),
            ("format", "json"),
            ("titles", title.as_str()),
            ("prop", "revisions"),
            ("rvprop", "content"),
            ("rvlimit", "1"),
            ("rvsection", "0"),
        ]);

        let Some(response) = get_json::<QueryResponse>(request).await? else {
            return Ok(None);
        };

        Ok(response
            .query
            .into_iter()
            .flat_map(|q| q.pages.into_values())
            .flat_map(|page| page.revisions)
            .find_map(|rev| rev.content)
            .and_then(|content| vernacular_from_wikitext(&content))
            .map(ResolvedValue::Text))
    }
}

#[async_trait]
impl Provider for WikipediaWikitext {
    fn name(&self) -> &'static str {
        "wikipedia-et"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        match field {
            LookupField::VernacularName(Language::Et) => {
                absorb(self.name(), field, query, self.fetch_name(query).await)
            }
            _ => ProviderResult::Absent,
        }
    }
}

// ── Title search ────────────────────────────────────────────────

/// Title search, for suggestions. Titles are free text.
pub struct WikipediaOpenSearch {
    client: Client,
    base_url: String,
    limit: usize,
}

impl WikipediaOpenSearch {
    /// Creates the provider.
    pub fn new(client: Client, config: &WikipediaConfig) -> Self {
        Self {
            client,
            base_url: config.search_base_url.clone(),
            limit: config.search_limit,
        }
    }

    async fn fetch_titles(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let search = query.to_string();
        let limit = self.limit.to_string();
        let request = self.client.get(format!("{}/w/api.php", self.base_url)).query(&[
            ("action", "opensearch"),
            ("search", search.as_str()),
            ("limit", limit.as_str()),
            ("namespace", "0"),
            ("format", "json"),
        ]);

        let Some(body) = get_text(request).await? else {
            return Ok(None);
        };

        // [query, [titles], [descriptions], [urls]]
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let titles = value
            .get(1)
            .and_then(|titles| titles.as_array())
            .map(|titles| {
                titles
                    .iter()
                    .filter_map(|t| t.as_str())
                    .map(normalize)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(name_list(titles))
    }
}

#[async_trait]
impl Provider for WikipediaOpenSearch {
    fn name(&self) -> &'static str {
        "wikipedia-search"
    }

    fn free_text_names(&self) -> bool {
        true
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        match field {
            LookupField::SuggestionList => {
                absorb(self.name(), field, query, self.fetch_titles(query).await)
            }
            _ => ProviderResult::Absent,
        }
    }
}
