//! HTML-scraped description sites.
//!
//! - [`MushroomExpert`]: species or genus pages, first substantial paragraph
//! - [`MycoBank`]: name detail pages, meta description then first paragraph
//!
//! Markup on these sites changes without notice. Anything that fails to
//! parse is treated as no data.

use crate::error::{FetchResult, ProviderError};
use crate::http::get_text;
use crate::provider::{absorb, Provider};
use async_trait::async_trait;
use mycolookup_text::{accept_prose, MIN_PROSE_CHARS};
use mycolookup_types::{LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Scraped-site endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// MushroomExpert base URL.
    pub mushroom_expert_base_url: String,
    /// MycoBank base URL.
    pub mycobank_base_url: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            mushroom_expert_base_url: "https://www.mushroomexpert.com".to_string(),
            mycobank_base_url: "https://www.mycobank.org".to_string(),
        }
    }
}

fn selector(css: &str) -> FetchResult<Selector> {
    Selector::parse(css).map_err(|e| ProviderError::Malformed(format!("selector {css}: {e}")))
}

/// Text of an element with whitespace runs collapsed.
fn element_text(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `<p>` whose text clears the quality gate.
pub fn first_substantial_paragraph(html: &str) -> FetchResult<Option<String>> {
    let document = Html::parse_document(html);
    let paragraphs = selector("p")?;
    Ok(document
        .select(&paragraphs)
        .map(element_text)
        .find_map(|text| accept_prose(&text, MIN_PROSE_CHARS)))
}

/// Content of `<meta name="description">`, if it clears the quality gate.
pub fn meta_description(html: &str) -> FetchResult<Option<String>> {
    let document = Html::parse_document(html);
    let meta = selector(r#"meta[name="description"]"#)?;
    Ok(document
        .select(&meta)
        .filter_map(|m| m.value().attr("content"))
        .find_map(|content| accept_prose(content, MIN_PROSE_CHARS)))
}

// ── MushroomExpert ──────────────────────────────────────────────

/// MushroomExpert species and genus pages.
pub struct MushroomExpert {
    client: Client,
    base_url: String,
}

impl MushroomExpert {
    /// Creates the provider.
    pub fn new(client: Client, config: &ScrapeConfig) -> Self {
        Self {
            client,
            base_url: config.mushroom_expert_base_url.clone(),
        }
    }

    /// Page path: `genus_epithet.html`, or `genus.html` for a bare genus.
    pub fn page_path(query: &TaxonQuery) -> String {
        let genus = query.genus().to_lowercase();
        match query.epithet() {
            Some(epithet) => format!("{genus}_{}.html", epithet.replace(' ', "_")),
            None => format!("{genus}.html"),
        }
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let url = format!("{}/{}", self.base_url, Self::page_path(query));
        let Some(html) = get_text(self.client.get(url)).await? else {
            return Ok(None);
        };
        Ok(first_substantial_paragraph(&html)?.map(ResolvedValue::Text))
    }
}

#[async_trait]
impl Provider for MushroomExpert {
    fn name(&self) -> &'static str {
        "mushroomexpert"
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

// ── MycoBank ────────────────────────────────────────────────────

/// MycoBank name detail pages.
pub struct MycoBank {
    client: Client,
    base_url: String,
}

impl MycoBank {
    /// Creates the provider.
    pub fn new(client: Client, config: &ScrapeConfig) -> Self {
        Self {
            client,
            base_url: config.mycobank_base_url.clone(),
        }
    }

    async fn fetch_description(&self, query: &TaxonQuery) -> FetchResult<Option<ResolvedValue>> {
        let url = format!(
            "{}/page/Name%20details%20page/name/{}",
            self.base_url,
            urlencoding::encode(&query.to_string())
        );
        let Some(html) = get_text(self.client.get(url)).await? else {
            return Ok(None);
        };

        let text = match meta_description(&html)? {
            Some(text) => Some(text),
            None => first_substantial_paragraph(&html)?,
        };
        Ok(text.map(ResolvedValue::Text))
    }
}

#[async_trait]
impl Provider for MycoBank {
    fn name(&self) -> &'static str {
        "mycobank"
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
