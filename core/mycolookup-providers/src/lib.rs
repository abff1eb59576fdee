//! External data providers for mycolookup.
//!
//! Each provider wraps one source behind the [`Provider`] trait:
//!
//! | Provider | Description | Vernacular | Suggestions |
//! |----------|-------------|------------|-------------|
//! | [`WikipediaSummary`] | yes | | |
//! | [`WikipediaWikitext`] | | et | |
//! | [`WikipediaOpenSearch`] | | | free text |
//! | [`Gbif`] | yes | et, fi, sv, en | yes |
//! | [`INaturalist`] | yes | et, fi, sv, en | yes |
//! | [`LajiFi`] | | fi, sv | yes |
//! | [`MushroomObserver`] | yes | | |
//! | [`MushroomExpert`] | yes | | |
//! | [`MycoBank`] | yes | | |
//! | [`CuratedDescriptions`] | yes | | |
//! | [`SpeciesCatalog`] | | | yes |
//!
//! Providers never fail. Transport errors, bad payloads and thin text are
//! logged and reported as [`ProviderResult::Absent`](mycolookup_types::ProviderResult::Absent).

mod catalog;
mod error;
mod gbif;
mod http;
mod inaturalist;
mod laji;
mod mushroom_observer;
mod provider;
mod scrape;
mod wikipedia;

pub use catalog::{CuratedDescriptions, SpeciesCatalog};
pub use error::{FetchResult, ProviderError};
pub use gbif::{Gbif, GbifConfig};
pub use http::{build_client, HttpConfig};
pub use inaturalist::{INaturalist, INaturalistConfig};
pub use laji::{LajiConfig, LajiFi};
pub use mushroom_observer::{MushroomObserver, MushroomObserverConfig};
pub use provider::Provider;
pub use scrape::{first_substantial_paragraph, meta_description, MushroomExpert, MycoBank, ScrapeConfig};
pub use wikipedia::{
    vernacular_from_wikitext, WikipediaConfig, WikipediaOpenSearch, WikipediaSummary,
    WikipediaWikitext,
};
