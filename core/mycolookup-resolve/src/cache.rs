//! In-memory TTL cache of resolutions.
//!
//! Entries are keyed by field and canonical query. Expiry is checked lazily
//! on read; an expired entry reads as a miss and is overwritten by the next
//! resolution. Every `purge_interval` writes the map is swept and expired
//! entries are evicted. Concurrent resolutions of the same key may race,
//! and the last write wins.

use chrono::{DateTime, Utc};
use mycolookup_types::{LookupField, Resolution, TaxonQuery};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Source of the current time. Injected so tests can control expiry.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time-to-live per kind of field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for descriptions and vernacular names (seconds).
    pub text_ttl_secs: u64,
    /// TTL for suggestion lists (seconds).
    pub suggestion_ttl_secs: u64,
    /// Expired entries are evicted on every Nth write. 0 disables sweeping.
    pub purge_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            text_ttl_secs: 24 * 60 * 60,
            suggestion_ttl_secs: 60 * 60,
            purge_interval: 128,
        }
    }
}

impl CacheConfig {
    /// TTL that applies to `field`.
    #[must_use]
    pub fn ttl_for(&self, field: LookupField) -> Duration {
        if field.is_text() {
            Duration::from_secs(self.text_ttl_secs)
        } else {
            Duration::from_secs(self.suggestion_ttl_secs)
        }
    }
}

/// Cache key: the field and the canonical query string.
pub type CacheKey = (LookupField, String);

/// A stored resolution and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub resolution: Resolution,
    pub created_at: DateTime<Utc>,
}

/// Process-wide resolution cache.
pub struct TtlCache {
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    writes: AtomicU64,
}

impl TtlCache {
    /// Creates a cache driven by the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache driven by `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            entries: RwLock::new(HashMap::new()),
            writes: AtomicU64::new(0),
        }
    }

    fn key(field: LookupField, query: &TaxonQuery) -> CacheKey {
        (field, query.to_string())
    }

    /// Returns the live resolution for `field` and `query`, if any.
    pub async fn get(&self, field: LookupField, query: &TaxonQuery) -> Option<Resolution> {
        let entries = self.entries.read().await;
        entries
            .get(&Self::key(field, query))
            .filter(|entry| !self.is_expired(field, entry))
            .map(|entry| entry.resolution.clone())
    }

    /// Stores `resolution`, replacing any previous entry for the key.
    ///
    /// Every `purge_interval` writes, expired entries are evicted as well.
    pub async fn set(&self, field: LookupField, query: &TaxonQuery, resolution: Resolution) {
        let entry = CacheEntry {
            resolution,
            created_at: self.clock.now(),
        };
        let mut entries = self.entries.write().await;
        entries.insert(Self::key(field, query), entry);

        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        let interval = self.config.purge_interval;
        if interval > 0 && writes % interval == 0 {
            let evicted = self.evict_expired(&mut entries);
            if evicted > 0 {
                debug!(evicted, remaining = entries.len(), "evicted expired cache entries");
            }
        }
    }

    /// Returns true once `entry` is older than the TTL for `field`.
    ///
    /// An entry stamped in the future (clock moved backwards) is live.
    pub fn is_expired(&self, field: LookupField, entry: &CacheEntry) -> bool {
        self.clock
            .now()
            .signed_duration_since(entry.created_at)
            .to_std()
            .is_ok_and(|age| age > self.config.ttl_for(field))
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every expired entry. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        self.evict_expired(&mut entries)
    }

    fn evict_expired(&self, entries: &mut HashMap<CacheKey, CacheEntry>) -> usize {
        let before = entries.len();
        entries.retain(|(field, _), entry| !self.is_expired(*field, entry));
        before - entries.len()
    }
}
