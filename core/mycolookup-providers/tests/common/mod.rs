//! Shared helpers for provider tests.

#![allow(dead_code)]

use mycolookup_providers::{build_client, HttpConfig};
use mycolookup_types::{ProviderResult, ResolvedValue, TaxonQuery};
use reqwest::Client;

/// Client with a short timeout so tests never hang.
pub fn client() -> Client {
    build_client(&HttpConfig {
        timeout_secs: 2,
        connect_timeout_secs: 1,
        ..Default::default()
    })
    .unwrap()
}

pub fn query(raw: &str) -> TaxonQuery {
    TaxonQuery::format(raw).unwrap()
}

/// Unwraps a textual hit.
pub fn found_text(result: ProviderResult) -> String {
    match result {
        ProviderResult::Found {
            value: ResolvedValue::Text(text),
            ..
        } => text,
        other => panic!("expected text, got {other:?}"),
    }
}

/// Unwraps a name-list hit.
pub fn found_names(result: ProviderResult) -> Vec<String> {
    match result {
        ProviderResult::Found {
            value: ResolvedValue::Names(names),
            ..
        } => names,
        other => panic!("expected names, got {other:?}"),
    }
}

pub const LONG_EXTRACT: &str = "Boletus edulis is a basidiomycete fungus, and the type species of the genus Boletus. \
It is widely distributed in the Northern Hemisphere. \
The fungus grows in deciduous and coniferous forests. \
It forms ectomycorrhizal associations with living trees.";
