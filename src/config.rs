//! Tracker configuration.
//!
//! ```
//! use navigation_tracker::TrackerConfig;
//!
//! let config = TrackerConfig::builder()
//!     .history_limit(50)
//!     .landing_path("/dashboard")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.history_limit(), 50);
//! assert_eq!(config.landing_path(), "/dashboard");
//! ```

use crate::error::ConfigError;
use std::num::NonZeroUsize;

/// Construction-time settings for a [`NavigationTracker`](crate::NavigationTracker).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "RawConfig")
)]
pub struct TrackerConfig {
    history_limit: NonZeroUsize,
    landing_path: String,
    title_cache_capacity: NonZeroUsize,
}

impl TrackerConfig {
    /// Default cap on the number of history entries.
    pub const DEFAULT_HISTORY_LIMIT: usize = 100;
    /// Default route before the router reports anything.
    pub const DEFAULT_LANDING_PATH: &'static str = "/";
    /// Default number of memoised title resolutions.
    pub const DEFAULT_TITLE_CACHE_CAPACITY: usize = 256;

    /// Start a builder seeded with the defaults.
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::default()
    }

    /// Default configuration with a custom history limit.
    pub fn with_history_limit(limit: usize) -> Result<Self, ConfigError> {
        Self::builder().history_limit(limit).build()
    }

    /// Maximum number of entries kept in history.
    pub fn history_limit(&self) -> usize {
        self.history_limit.get()
    }

    /// Route the tracker reports before any route change is recorded.
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Capacity of the title resolution cache.
    pub fn title_cache_capacity(&self) -> NonZeroUsize {
        self.title_cache_capacity
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_limit: NonZeroUsize::new(Self::DEFAULT_HISTORY_LIMIT)
                .unwrap_or(NonZeroUsize::MIN),
            landing_path: Self::DEFAULT_LANDING_PATH.to_string(),
            title_cache_capacity: NonZeroUsize::new(Self::DEFAULT_TITLE_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Chainable builder for [`TrackerConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct TrackerConfigBuilder {
    history_limit: usize,
    landing_path: String,
    title_cache_capacity: usize,
}

impl Default for TrackerConfigBuilder {
    fn default() -> Self {
        Self {
            history_limit: TrackerConfig::DEFAULT_HISTORY_LIMIT,
            landing_path: TrackerConfig::DEFAULT_LANDING_PATH.to_string(),
            title_cache_capacity: TrackerConfig::DEFAULT_TITLE_CACHE_CAPACITY,
        }
    }
}

impl TrackerConfigBuilder {
    /// Set the history limit (must be positive).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the landing path (must start with `/`).
    pub fn landing_path(mut self, path: impl Into<String>) -> Self {
        self.landing_path = path.into();
        self
    }

    /// Set the title cache capacity (must be positive).
    pub fn title_cache_capacity(mut self, capacity: usize) -> Self {
        self.title_cache_capacity = capacity;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<TrackerConfig, ConfigError> {
        let history_limit =
            NonZeroUsize::new(self.history_limit).ok_or(ConfigError::ZeroHistoryLimit)?;
        let title_cache_capacity =
            NonZeroUsize::new(self.title_cache_capacity).ok_or(ConfigError::ZeroCacheCapacity)?;
        if !self.landing_path.starts_with('/') {
            return Err(ConfigError::InvalidLandingPath {
                path: self.landing_path,
            });
        }

        Ok(TrackerConfig {
            history_limit,
            landing_path: self.landing_path,
            title_cache_capacity,
        })
    }
}

/// Unvalidated wire form; every field is optional and falls back to the default.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    history_limit: usize,
    landing_path: String,
    title_cache_capacity: usize,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        Self {
            history_limit: TrackerConfig::DEFAULT_HISTORY_LIMIT,
            landing_path: TrackerConfig::DEFAULT_LANDING_PATH.to_string(),
            title_cache_capacity: TrackerConfig::DEFAULT_TITLE_CACHE_CAPACITY,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for TrackerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        TrackerConfig::builder()
            .history_limit(raw.history_limit)
            .landing_path(raw.landing_path)
            .title_cache_capacity(raw.title_cache_capacity)
            .build()
    }
}
