//! Error types.
//!
//! Recording navigation events never fails. Errors only surface in two places:
//!
//! - [`ConfigError`]: building a [`TrackerConfig`](crate::TrackerConfig) with
//!   out-of-range values.
//! - [`RouterError`]: a [`Router`](crate::Router) refusing a navigation
//!   request made through
//!   [`NavigationTracker::navigate_to_route`](crate::NavigationTracker::navigate_to_route).
//!
//! [`TrackerError`] unifies both for callers that just want `?`.
//!
//! # Examples
//!
//! ```
//! use navigation_tracker::error::{RouterError, TrackerError};
//!
//! let err: TrackerError = RouterError::InvalidPath { path: "settings".into() }.into();
//! assert_eq!(err.to_string(), "Router error: Invalid path 'settings': paths must start with '/'");
//! ```

use std::fmt;
use thiserror::Error;

/// Invalid tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `history_limit` was zero.
    #[error("History limit must be a positive integer")]
    ZeroHistoryLimit,

    /// The landing path is not an absolute path.
    #[error("Invalid landing path '{path}': paths must start with '/'")]
    InvalidLandingPath { path: String },

    /// Title cache capacity was zero.
    #[error("Title cache capacity must be a positive integer")]
    ZeroCacheCapacity,
}

/// Direction of a history step on a [`MemoryRouter`](crate::MemoryRouter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

impl fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryDirection::Back => f.write_str("back"),
            HistoryDirection::Forward => f.write_str("forward"),
        }
    }
}

/// A router refused or could not carry out a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The requested path is malformed.
    #[error("Invalid path '{path}': paths must start with '/'")]
    InvalidPath { path: String },

    /// There is no entry to step to in the requested direction.
    #[error("Cannot go {direction}: no history in that direction")]
    NoHistory { direction: HistoryDirection },

    /// The underlying platform router is gone.
    ///
    /// Returned by host [`Router`](crate::Router) implementations that wrap a
    /// platform router; [`MemoryRouter`](crate::MemoryRouter) never loses its
    /// backing stack.
    #[error("Router is disconnected")]
    Disconnected,
}

/// Any error surfaced by the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Router error: {0}")]
    Router(#[from] RouterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::ZeroHistoryLimit.to_string(),
            "History limit must be a positive integer"
        );
        let err = ConfigError::InvalidLandingPath {
            path: "home".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid landing path 'home': paths must start with '/'"
        );
    }

    #[test]
    fn test_router_error_display() {
        let err = RouterError::NoHistory {
            direction: HistoryDirection::Back,
        };
        assert_eq!(err.to_string(), "Cannot go back: no history in that direction");
        assert_eq!(RouterError::Disconnected.to_string(), "Router is disconnected");
    }

    #[test]
    fn test_tracker_error_from() {
        let err: TrackerError = ConfigError::ZeroCacheCapacity.into();
        assert!(matches!(err, TrackerError::Config(ConfigError::ZeroCacheCapacity)));

        let err: TrackerError = RouterError::Disconnected.into();
        assert_eq!(err.to_string(), "Router error: Router is disconnected");
    }
}
