//! Human-readable titles for router-reported locations.
//!
//! The router only knows paths. When a location change arrives without a
//! title, the tracker asks its [`TitleRegistry`]:
//!
//! 1. Registered patterns are tried in registration order; the first match
//!    wins. `{name}` placeholders in the title are replaced by the captured
//!    `:name` parameter.
//! 2. Otherwise the title is derived from the last path segment
//!    (`/budgets/monthly-plan` → `"Monthly Plan"`, `/` → `"Home"`).
//!
//! ```
//! use navigation_tracker::TitleRegistry;
//!
//! let mut titles = TitleRegistry::new();
//! titles.register("/accounts/:id", "Account {id}");
//!
//! assert_eq!(titles.resolve("/accounts/42"), "Account 42");
//! assert_eq!(titles.resolve("/split-transactions"), "Split Transactions");
//! assert_eq!(titles.resolve("/"), "Home");
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, TitleCache};
use crate::matching::{match_pattern, split_path, split_query};
use crate::{debug_log, trace_log};
#[cfg(feature = "cache")]
use std::num::NonZeroUsize;

/// Title used for the root path.
pub const HOME_TITLE: &str = "Home";

#[derive(Debug, Clone)]
struct TitlePattern {
    pattern: String,
    title: String,
}

/// Pattern-based title lookup with a derived fallback.
#[derive(Debug)]
pub struct TitleRegistry {
    patterns: Vec<TitlePattern>,
    #[cfg(feature = "cache")]
    cache: TitleCache,
}

impl TitleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            #[cfg(feature = "cache")]
            cache: TitleCache::new(),
        }
    }

    /// Registry whose resolution cache holds at most `capacity` titles.
    #[cfg(feature = "cache")]
    pub fn with_cache_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            patterns: Vec::new(),
            cache: TitleCache::with_capacity(capacity),
        }
    }

    /// Register a title for a path pattern (`:param` and trailing `*` allowed).
    ///
    /// Earlier registrations take precedence over later ones.
    pub fn register(&mut self, pattern: impl Into<String>, title: impl Into<String>) -> &mut Self {
        let pattern = pattern.into();
        let title = title.into();
        debug_log!("Registered title '{}' for pattern '{}'", title, pattern);
        self.patterns.push(TitlePattern { pattern, title });
        #[cfg(feature = "cache")]
        self.cache.clear();
        self
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Resolve a title for `location`. Query strings are ignored.
    pub fn resolve(&mut self, location: &str) -> String {
        let (path, _) = split_query(location);

        #[cfg(feature = "cache")]
        {
            if let Some(title) = self.cache.get(path) {
                return title;
            }
        }

        let title = self.resolve_uncached(path);

        #[cfg(feature = "cache")]
        self.cache.insert(path.to_string(), title.clone());

        title
    }

    fn resolve_uncached(&self, path: &str) -> String {
        for candidate in &self.patterns {
            if let Some(params) = match_pattern(&candidate.pattern, path) {
                trace_log!("'{}' matched title pattern '{}'", path, candidate.pattern);
                let mut title = candidate.title.clone();
                for (name, value) in params.iter() {
                    title = title.replace(&format!("{{{name}}}"), value);
                }
                return title;
            }
        }

        derive_title(path)
    }

    /// Resolution cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

impl Default for TitleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case the last path segment, splitting on `-` and `_`.
///
/// ```
/// use navigation_tracker::titles::derive_title;
///
/// assert_eq!(derive_title("/reports/cash_flow"), "Cash Flow");
/// assert_eq!(derive_title("/"), "Home");
/// ```
pub fn derive_title(path: &str) -> String {
    let Some(last) = split_path(path).pop() else {
        return HOME_TITLE.to_string();
    };

    last.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
