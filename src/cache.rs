//! Fingerprint and cache store for translation results.
//!
//! The cache exists to avoid duplicate paid provider calls within a TTL
//! window, not to squeeze out hit rate under memory pressure. Entries are
//! immutable once written; eviction only removes. The bound is enforced
//! opportunistically: when the store is full, `put` sweeps a batch of
//! already-expired entries and then inserts regardless.

use crate::types::TranslationResult;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// How many expired entries one sweep removes at most.
const SWEEP_BATCH: usize = 200;

/// Deterministic cache key for (text, source language, target language).
/// NUL separators keep ("ab", "c") and ("a", "bc") distinct.
pub fn fingerprint(text: &str, source_lang: &str, target_lang: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(text.as_bytes());
    hasher.update(b"\0");
    hasher.update(source_lang.as_bytes());
    hasher.update(b"\0");
    hasher.update(target_lang.as_bytes());
    hasher.finalize().to_hex().to_string()
}

struct CacheEntry {
    result: TranslationResult,
    created_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Bounded, TTL-expiring store of translation results.
///
/// Safe for concurrent use; entries are never partially updated, only
/// inserted, overwritten, or removed. This component cannot fail — it
/// only reports presence or absence.
pub struct CacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
    max_entries: usize,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries,
            ttl,
        }
    }

    /// Fetch a cached result. Returns `None` both when no entry exists
    /// and when the stored entry has outlived its TTL; an expired entry
    /// is evicted as a side effect of the lookup.
    pub fn get(&self, key: &str) -> Option<TranslationResult> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.result.clone()),
            None => None,
        }
    }

    /// Insert a result unconditionally, overwriting any prior entry for
    /// the same key. At capacity, sweeps up to [`SWEEP_BATCH`] expired
    /// entries first.
    pub fn put(&self, key: String, result: TranslationResult) {
        let mut entries = self.entries.lock().unwrap();

        if entries.len() >= self.max_entries {
            let expired: Vec<String> = entries
                .iter()
                .filter(|(_, entry)| entry.is_expired(self.ttl))
                .take(SWEEP_BATCH)
                .map(|(k, _)| k.clone())
                .collect();
            debug!("cache at capacity, sweeping {} expired entries", expired.len());
            for k in &expired {
                entries.remove(k);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                result,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of live entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
