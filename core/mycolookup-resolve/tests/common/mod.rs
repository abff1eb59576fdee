//! Mock providers and a manual clock for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mycolookup_providers::Provider;
use mycolookup_resolve::{CacheConfig, Clock, ProviderTable, Resolver, ResolverConfig, TtlCache};
use mycolookup_types::{LookupField, ProviderResult, ResolvedValue, TaxonQuery};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Provider that answers every lookup with a fixed value and counts calls.
pub struct MockProvider {
    name: &'static str,
    answer: Option<ResolvedValue>,
    free_text: bool,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn absent(name: &'static str) -> Arc<Self> {
        Arc::new(Self::build(name, None))
    }

    pub fn text(name: &'static str, text: &str) -> Arc<Self> {
        Arc::new(Self::build(name, Some(ResolvedValue::Text(text.to_string()))))
    }

    pub fn names(name: &'static str, names: &[&str]) -> Arc<Self> {
        let names = names.iter().map(|n| n.to_string()).collect();
        Arc::new(Self::build(name, Some(ResolvedValue::Names(names))))
    }

    /// Name list from a free-text source (binomial filter applies).
    pub fn free_text_names(name: &'static str, names: &[&str]) -> Arc<Self> {
        let names = names.iter().map(|n| n.to_string()).collect();
        let mut provider = Self::build(name, Some(ResolvedValue::Names(names)));
        provider.free_text = true;
        Arc::new(provider)
    }

    fn build(name: &'static str, answer: Option<ResolvedValue>) -> Self {
        Self {
            name,
            answer,
            free_text: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn free_text_names(&self) -> bool {
        self.free_text
    }

    async fn lookup(&self, _field: LookupField, _query: &TaxonQuery) -> ProviderResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(value) => ProviderResult::Found {
                value: value.clone(),
                provider: self.name,
            },
            None => ProviderResult::Absent,
        }
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Arc::new(Self {
            now: Mutex::new(start),
        })
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(by).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn query(raw: &str) -> TaxonQuery {
    TaxonQuery::format(raw).unwrap()
}

/// Builds a resolver over `table` with default settings and `clock`.
pub fn resolver_with_clock(table: ProviderTable, clock: Arc<ManualClock>) -> Resolver {
    Resolver::new(
        table,
        TtlCache::with_clock(CacheConfig::default(), clock),
        ResolverConfig::default(),
    )
}

pub fn resolver(table: ProviderTable) -> Resolver {
    resolver_with_clock(table, ManualClock::new())
}

pub const LONG_TEXT: &str =
    "A stout brown bolete with a pale net on the stem, common in spruce forests.";
pub const OTHER_LONG_TEXT: &str =
    "A slender orange mushroom with forking ridges that grows in mossy pine woods.";

/// Table with a single chain for `field`.
pub fn table(field: LookupField, providers: &[&Arc<MockProvider>]) -> ProviderTable {
    let mut table = ProviderTable::new();
    for provider in providers {
        table.register(field, Arc::clone(provider) as Arc<dyn Provider>);
    }
    table
}
