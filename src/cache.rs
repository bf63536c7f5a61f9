//! Title resolution caching.
//!
//! [`TitleCache`] memoises `location → title` resolutions made by the
//! [`TitleRegistry`](crate::TitleRegistry) so that repeated visits to the same
//! location skip pattern matching. It is gated behind the `cache` feature and
//! uses the [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses and invalidations.
//!
//! # Examples
//!
//! ```
//! use navigation_tracker::cache::TitleCache;
//!
//! let mut cache = TitleCache::new();
//! cache.insert("/accounts/7".to_string(), "Account 7".to_string());
//!
//! assert_eq!(cache.get("/accounts/7").as_deref(), Some("Account 7"));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    /// Number of full invalidations (via [`TitleCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of resolved titles keyed by location.
#[derive(Debug)]
pub struct TitleCache {
    titles: LruCache<String, String>,
    stats: CacheStats,
}

impl TitleCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(
            NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        )
    }

    /// Create a cache holding at most `capacity` titles.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            titles: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up a cached title, updating hit/miss stats.
    pub fn get(&mut self, location: &str) -> Option<String> {
        if let Some(title) = self.titles.get(location) {
            self.stats.hits += 1;
            trace_log!("Title cache hit for '{}'", location);
            Some(title.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Title cache miss for '{}'", location);
            None
        }
    }

    /// Store a resolved title.
    pub fn insert(&mut self, location: String, title: String) {
        self.titles.put(location, title);
    }

    /// Drop every cached title and count an invalidation.
    pub fn clear(&mut self) {
        let len = self.titles.len();
        self.titles.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Title cache cleared: {} entries removed (hit rate {:.1}%)",
            len,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Get cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Maximum number of cached titles.
    pub fn capacity(&self) -> NonZeroUsize {
        self.titles.cap()
    }
}

impl Default for TitleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = TitleCache::new();
        assert!(cache.get("/budgets").is_none());
        cache.insert("/budgets".to_string(), "Budgets".to_string());
        assert_eq!(cache.get("/budgets").as_deref(), Some("Budgets"));
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
        assert!((cache.stats().hit_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = TitleCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.insert("/a".to_string(), "A".to_string());
        cache.insert("/b".to_string(), "B".to_string());
        // touch /a so /b becomes least recently used
        assert!(cache.get("/a").is_some());
        cache.insert("/c".to_string(), "C".to_string());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("/b").is_none());
        assert!(cache.get("/a").is_some());
        assert!(cache.get("/c").is_some());
    }

    #[test]
    fn test_clear_counts_invalidation() {
        let mut cache = TitleCache::new();
        cache.insert("/".to_string(), "Home".to_string());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
        assert_eq!(cache.capacity().get(), 256);
    }
}
