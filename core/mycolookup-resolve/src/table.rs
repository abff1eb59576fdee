//! Ordered provider chains per field.

use mycolookup_providers::{
    build_client, CuratedDescriptions, FetchResult, Gbif, GbifConfig, HttpConfig, INaturalist,
    INaturalistConfig, LajiConfig, LajiFi, MushroomExpert, MushroomObserver,
    MushroomObserverConfig, MycoBank, Provider, ScrapeConfig, SpeciesCatalog, WikipediaConfig,
    WikipediaOpenSearch, WikipediaSummary, WikipediaWikitext,
};
use mycolookup_types::{Language, LookupField};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Endpoint and client settings for every built-in provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub http: HttpConfig,
    pub wikipedia: WikipediaConfig,
    pub gbif: GbifConfig,
    pub inaturalist: INaturalistConfig,
    pub laji: LajiConfig,
    pub mushroom_observer: MushroomObserverConfig,
    pub scrape: ScrapeConfig,
}

/// Priority-ordered providers for each [`LookupField`].
///
/// A field with no registered chain resolves straight to its fallback.
#[derive(Clone, Default)]
pub struct ProviderTable {
    chains: HashMap<LookupField, Vec<Arc<dyn Provider>>>,
}

impl ProviderTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `provider` to the end of the chain for `field`.
    pub fn register(&mut self, field: LookupField, provider: Arc<dyn Provider>) -> &mut Self {
        self.chains.entry(field).or_default().push(provider);
        self
    }

    /// Replaces the chain for `field`.
    #[must_use]
    pub fn with_chain(mut self, field: LookupField, providers: Vec<Arc<dyn Provider>>) -> Self {
        self.chains.insert(field, providers);
        self
    }

    /// Providers for `field`, highest priority first.
    pub fn chain(&self, field: LookupField) -> &[Arc<dyn Provider>] {
        self.chains.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Provider names for `field`, in order.
    pub fn chain_names(&self, field: LookupField) -> Vec<&'static str> {
        self.chain(field).iter().map(|p| p.name()).collect()
    }

    /// Builds the production table.
    ///
    /// Structured APIs come before scraped sites, which come before the
    /// offline catalogs. laji.fi is left out when no access token is set.
    pub fn standard(config: &ProvidersConfig) -> FetchResult<Self> {
        let client = build_client(&config.http)?;

        let wiki_summary: Arc<dyn Provider> =
            Arc::new(WikipediaSummary::new(client.clone(), &config.wikipedia));
        let wiki_text: Arc<dyn Provider> =
            Arc::new(WikipediaWikitext::new(client.clone(), &config.wikipedia));
        let wiki_search: Arc<dyn Provider> =
            Arc::new(WikipediaOpenSearch::new(client.clone(), &config.wikipedia));
        let gbif: Arc<dyn Provider> = Arc::new(Gbif::new(client.clone(), config.gbif.clone()));
        let inat: Arc<dyn Provider> =
            Arc::new(INaturalist::new(client.clone(), config.inaturalist.clone()));
        let observer: Arc<dyn Provider> = Arc::new(MushroomObserver::new(
            client.clone(),
            config.mushroom_observer.clone(),
        ));
        let expert: Arc<dyn Provider> =
            Arc::new(MushroomExpert::new(client.clone(), &config.scrape));
        let mycobank: Arc<dyn Provider> = Arc::new(MycoBank::new(client.clone(), &config.scrape));
        let curated: Arc<dyn Provider> = Arc::new(CuratedDescriptions::new());

        let laji = LajiFi::new(client, config.laji.clone());
        let laji: Option<Arc<dyn Provider>> = if laji.has_credentials() {
            Some(Arc::new(laji))
        } else {
            warn!("no laji.fi access token configured, skipping laji.fi");
            None
        };

        let mut table = Self::new().with_chain(
            LookupField::Description,
            vec![
                wiki_summary,
                inat.clone(),
                gbif.clone(),
                observer,
                expert,
                mycobank,
                curated,
            ],
        );

        for language in Language::ALL {
            let field = LookupField::VernacularName(language);
            match language {
                Language::Et => {
                    table.register(field, wiki_text.clone());
                }
                Language::Fi | Language::Sv => {
                    if let Some(laji) = &laji {
                        table.register(field, laji.clone());
                    }
                }
                Language::En => {}
            }
            table.register(field, gbif.clone()).register(field, inat.clone());
        }

        if let Some(laji) = laji {
            table.register(LookupField::SuggestionList, laji);
        }
        table
            .register(LookupField::SuggestionList, gbif)
            .register(LookupField::SuggestionList, inat)
            .register(LookupField::SuggestionList, wiki_search)
            .register(LookupField::SuggestionList, Arc::new(SpeciesCatalog::new()));

        info!(
            description = ?table.chain_names(LookupField::Description),
            suggestions = ?table.chain_names(LookupField::SuggestionList),
            "provider table ready"
        );
        Ok(table)
    }
}
