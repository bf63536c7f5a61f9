//! # navigation-tracker
//!
//! Bounded navigation history and UI-state tracking for single-page
//! dashboards.
//!
//! The crate records what the user did in the interface (route changes, tab
//! switches, modals, sidebar navigation) as an append-only, size-capped log,
//! keeps the "current" UI facts derived from it, and answers analytics and
//! recent-history queries for history panels.
//!
//! ## Pieces
//!
//! | Type | Role |
//! |------|------|
//! | [`NavigationTracker`] | Entry point: owns state, router subscription, titles, observers |
//! | [`NavigationState`] | The bounded log and current facts; changes only via [`NavigationAction`] |
//! | [`NavigationEntry`] | One immutable event record |
//! | [`Router`] / [`MemoryRouter`] | Router capability and an in-memory implementation |
//! | [`TitleRegistry`] | Titles for locations the router reports without one |
//! | [`NavigationObserver`] | Side effects after each transition |
//!
//! ## Quick start
//!
//! ```
//! use navigation_tracker::{EntryData, MemoryRouter, NavigationTracker, TrackerConfig};
//!
//! let config = TrackerConfig::builder().history_limit(50).build().unwrap();
//! let mut tracker = NavigationTracker::new(config, MemoryRouter::new("/"));
//!
//! tracker.navigate_to_route("/accounts").unwrap();
//! tracker.switch_tab("savings", "Savings", None);
//! tracker.open_modal(
//!     "new-transaction",
//!     "New Transaction",
//!     Some(EntryData::new().with("accountId", "12")),
//! );
//! tracker.close_modal("new-transaction");
//!
//! let stats = tracker.navigation_stats();
//! assert_eq!(stats.total_navigations, 4);
//! assert_eq!(stats.active_modals, 0);
//! assert_eq!(stats.current_tab.as_deref(), Some("savings"));
//!
//! let recent = tracker.recent_history(2);
//! assert_eq!(recent[0].tab_id(), Some("savings"));
//! assert_eq!(recent[1].modal_id(), Some("new-transaction"));
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `log` | yes | Log through the `log` crate |
//! | `tracing` | no | Log through `tracing` instead (enable at most one backend) |
//! | `cache` | yes | LRU cache for title resolution |
//! | `serde` | no | `Serialize`/`Deserialize` for config, entries, stats and state snapshots |

pub mod action;
#[cfg(feature = "cache")]
pub mod cache;
pub mod config;
pub mod data;
pub mod entry;
pub mod error;
pub mod logging;
pub mod matching;
pub mod observer;
pub mod router;
pub mod state;
pub mod stats;
pub mod titles;
pub mod tracker;

pub use action::{NavigationAction, Transition};
pub use config::{TrackerConfig, TrackerConfigBuilder};
pub use data::EntryData;
pub use entry::{EntryId, EntryKind, EntryTarget, NavigationEntry};
pub use error::{ConfigError, HistoryDirection, RouterError, TrackerError};
pub use observer::{observer_fn, FnObserver, NavigationObserver};
pub use router::{
    location_channel, LocationChange, LocationPublisher, LocationSubscription, MemoryRouter,
    Router,
};
pub use state::{NavigationState, DEFAULT_RECENT_COUNT};
pub use stats::NavigationStats;
pub use titles::TitleRegistry;
pub use tracker::NavigationTracker;
