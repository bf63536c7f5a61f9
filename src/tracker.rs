//! The navigation tracker.
//!
//! [`NavigationTracker`] ties the pieces together:
//!
//! - it owns the [`NavigationState`] and is the only thing that dispatches
//!   actions to it;
//! - it holds a [`Router`] and a [`LocationSubscription`] on it, turning every
//!   reported location into exactly one Route entry;
//! - it resolves titles for untitled locations through a [`TitleRegistry`];
//! - it notifies registered [`NavigationObserver`]s after each transition.
//!
//! There is no global instance. Construct one per session and pass it (or a
//! reference to it) to whatever needs it; a tracker cannot be used before it
//! exists. Every mutator takes `&mut self`, so mutations are serialized by
//! the borrow checker. To share a tracker across threads, put it behind a
//! single `Mutex`.
//!
//! # Route changes
//!
//! Route entries are recorded from one source only: the router. Calling
//! [`navigate_to_route`](NavigationTracker::navigate_to_route) asks the router
//! to move and then drains its notifications; it never appends on its own.
//! Hosts whose router changes location by itself (browser back button, deep
//! links) call [`sync`](NavigationTracker::sync) from their event loop.
//! Repeated identical locations are recorded every time.
//!
//! ```
//! use navigation_tracker::{MemoryRouter, NavigationTracker, TrackerConfig};
//!
//! let mut tracker = NavigationTracker::new(TrackerConfig::default(), MemoryRouter::new("/"));
//! tracker.navigate_to_route("/transactions").unwrap();
//! tracker.open_modal("split", "Split Transaction", None);
//!
//! let stats = tracker.navigation_stats();
//! assert_eq!(stats.route_changes, 2); // initial "/" plus "/transactions"
//! assert_eq!(stats.active_modals, 1);
//! assert_eq!(tracker.active_modals()[0].parent_route(), Some("/transactions"));
//! ```

use crate::action::{NavigationAction, Transition};
use crate::config::TrackerConfig;
use crate::data::EntryData;
use crate::entry::{EntryId, EntryKind, NavigationEntry};
use crate::error::TrackerError;
use crate::matching::split_query;
use crate::observer::{NavigationObserver, Observers};
use crate::router::{LocationChange, LocationSubscription, MemoryRouter, Router};
use crate::state::{NavigationState, DEFAULT_RECENT_COUNT};
use crate::stats::NavigationStats;
use crate::titles::TitleRegistry;
use crate::{debug_log, error_log, info_log};
use std::collections::VecDeque;

/// Records navigation events and answers history/analytics queries.
pub struct NavigationTracker<R: Router = MemoryRouter> {
    state: NavigationState,
    router: R,
    subscription: LocationSubscription,
    titles: TitleRegistry,
    observers: Observers,
}

impl<R: Router> NavigationTracker<R> {
    /// Create a tracker, subscribe to `router`, and record its current location.
    pub fn new(config: TrackerConfig, router: R) -> Self {
        #[cfg(feature = "cache")]
        let titles = TitleRegistry::with_cache_capacity(config.title_cache_capacity());
        #[cfg(not(feature = "cache"))]
        let titles = TitleRegistry::new();

        Self::with_titles(config, router, titles)
    }

    /// Like [`new`](Self::new), with a pre-populated title registry so the
    /// initial location already gets a registered title.
    pub fn with_titles(config: TrackerConfig, mut router: R, titles: TitleRegistry) -> Self {
        let subscription = router.subscribe();
        let mut tracker = Self {
            state: NavigationState::new(&config),
            router,
            subscription,
            titles,
            observers: Observers::default(),
        };

        info_log!(
            "Navigation tracker created (history limit {}, landing path '{}')",
            config.history_limit(),
            config.landing_path()
        );
        tracker.sync();
        tracker
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Apply an action to the state and notify observers.
    pub fn dispatch(&mut self, action: NavigationAction) -> Transition {
        let recorded = matches!(action, NavigationAction::Record(_));
        let cleared = matches!(action, NavigationAction::ClearHistory);

        let transition = self.state.apply(action);

        if let Some(modal) = &transition.closed_modal {
            self.observers.modal_closed(modal);
        }
        if recorded {
            // The limit is at least one, so the appended entry is always last.
            if let Some(entry) = self.state.last_entry() {
                self.observers.entry(entry, &transition.evicted);
            }
        }
        if cleared {
            info_log!("Navigation history cleared ({} entries)", transition.cleared);
            self.observers.history_cleared(transition.cleared);
        }

        transition
    }

    fn record(&mut self, entry: NavigationEntry) -> EntryId {
        let id = entry.id();
        self.dispatch(NavigationAction::record(entry));
        id
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a Route entry and make `path` the current route.
    ///
    /// A `?query` on `path` is decoded into the entry's data; the path is
    /// stored as given.
    pub fn record_route_change(
        &mut self,
        path: impl Into<String>,
        title: impl Into<String>,
    ) -> EntryId {
        let path = path.into();
        let data = match split_query(&path) {
            (_, Some(query)) if !query.is_empty() => Some(EntryData::from_query_string(query)),
            _ => None,
        };
        self.record(NavigationEntry::route(path, title, data))
    }

    /// Ask the router to navigate, then record whatever it reports.
    ///
    /// Returns the number of Route entries recorded by the follow-up sync.
    pub fn navigate_to_route(&mut self, path: &str) -> Result<usize, TrackerError> {
        debug_log!("Requesting navigation to '{}'", path);
        if let Err(err) = self.router.navigate(path) {
            error_log!("Router rejected navigation to '{}': {}", path, err);
            return Err(err.into());
        }
        Ok(self.sync())
    }

    /// Record every location the router has reported since the last sync.
    ///
    /// Returns how many Route entries were recorded.
    pub fn sync(&mut self) -> usize {
        let mut recorded = 0;
        while let Some(change) = self.subscription.try_next() {
            self.record_location(change);
            recorded += 1;
        }
        if recorded > 0 {
            debug_log!("Synced {} location change(s) from router", recorded);
        }
        recorded
    }

    fn record_location(&mut self, change: LocationChange) -> EntryId {
        let title = match change.title {
            Some(title) => title,
            None => self.titles.resolve(&change.path),
        };
        self.record_route_change(change.path, title)
    }

    /// Append a Modal entry under the current route and mark it open.
    ///
    /// Reopening a modal that is already open replaces its active entry.
    pub fn open_modal(
        &mut self,
        modal_id: impl Into<String>,
        title: impl Into<String>,
        data: Option<EntryData>,
    ) -> EntryId {
        let parent = self.state.current_route().to_string();
        self.record(NavigationEntry::modal(modal_id, title, parent, data))
    }

    /// Remove a modal from the active set. Returns `false` if it was not open.
    pub fn close_modal(&mut self, modal_id: impl Into<String>) -> bool {
        self.dispatch(NavigationAction::close_modal(modal_id))
            .closed_modal
            .is_some()
    }

    /// Append a Tab entry under the current route and make it the current tab.
    pub fn switch_tab(
        &mut self,
        tab_id: impl Into<String>,
        title: impl Into<String>,
        data: Option<EntryData>,
    ) -> EntryId {
        let route = self.state.current_route().to_string();
        self.record(NavigationEntry::tab(tab_id, title, route, data))
    }

    /// Append a Sidebar entry under the current route and update the sidebar state.
    pub fn sidebar_navigate(
        &mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        data: Option<EntryData>,
    ) -> EntryId {
        let route = self.state.current_route().to_string();
        self.record(NavigationEntry::sidebar(path, title, route, data))
    }

    /// Empty history and active modals. Current route, tab and sidebar survive.
    pub fn clear_history(&mut self) {
        self.dispatch(NavigationAction::ClearHistory);
    }

    /// Register an observer for subsequent transitions.
    pub fn add_observer(&mut self, observer: impl NavigationObserver) {
        self.observers.add(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Per-kind counts over the surviving history.
    pub fn navigation_stats(&self) -> NavigationStats {
        self.state.stats()
    }

    /// The last `count` entries in chronological order.
    pub fn recent_history(&self, count: usize) -> Vec<&NavigationEntry> {
        self.state.recent_history(count)
    }

    /// The last ten entries in chronological order.
    pub fn recent_history_default(&self) -> Vec<&NavigationEntry> {
        self.state.recent_history(DEFAULT_RECENT_COUNT)
    }

    /// Borrow the navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Owned copy of the state, for rendering off-thread or serializing.
    pub fn snapshot(&self) -> NavigationState {
        self.state.clone()
    }

    /// Full surviving history, oldest first.
    pub fn history(&self) -> &VecDeque<NavigationEntry> {
        self.state.history()
    }

    /// Modals currently open.
    pub fn active_modals(&self) -> &[NavigationEntry] {
        self.state.active_modals()
    }

    /// Get current route.
    pub fn current_route(&self) -> &str {
        self.state.current_route()
    }

    /// Get current tab, if any.
    pub fn current_tab(&self) -> Option<&str> {
        self.state.current_tab()
    }

    /// Get current sidebar path, if any.
    pub fn sidebar_state(&self) -> Option<&str> {
        self.state.sidebar_state()
    }

    /// Check if a modal is open.
    pub fn is_modal_open(&self, modal_id: &str) -> bool {
        self.state.is_modal_open(modal_id)
    }

    /// Get the active entry of an open modal.
    pub fn active_modal(&self, modal_id: &str) -> Option<&NavigationEntry> {
        self.state.active_modal(modal_id)
    }

    /// Surviving entries of one kind, oldest first.
    pub fn entries_of_kind(&self, kind: EntryKind) -> Vec<&NavigationEntry> {
        self.state.entries_of_kind(kind).collect()
    }

    /// Route visited before the latest one in history.
    pub fn previous_route(&self) -> Option<&str> {
        self.state.previous_route()
    }

    /// Route entry counts per path, most visited first.
    pub fn route_visit_counts(&self) -> Vec<(String, usize)> {
        self.state.route_visit_counts()
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Borrow the router.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Direct router access, e.g. for back/forward. Call [`sync`](Self::sync)
    /// afterwards to record the resulting locations.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Borrow the title registry.
    pub fn titles(&self) -> &TitleRegistry {
        &self.titles
    }

    /// Mutable title registry, e.g. to register patterns.
    pub fn titles_mut(&mut self) -> &mut TitleRegistry {
        &mut self.titles
    }
}

impl<R: Router> std::fmt::Debug for NavigationTracker<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationTracker")
            .field("state", &self.state)
            .field("titles", &self.titles)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> NavigationTracker {
        NavigationTracker::new(TrackerConfig::default(), MemoryRouter::default())
    }

    #[test]
    fn test_initial_location_recorded_once() {
        let tracker = tracker();
        assert_eq!(tracker.history().len(), 1);
        let entry = &tracker.history()[0];
        assert_eq!(entry.kind(), EntryKind::Route);
        assert_eq!(entry.path(), Some("/"));
        assert_eq!(entry.title(), "Home");
    }

    #[test]
    fn test_navigate_records_from_router() {
        let mut tracker = tracker();
        assert_eq!(tracker.navigate_to_route("/budgets").unwrap(), 1);
        assert_eq!(tracker.current_route(), "/budgets");
        assert_eq!(tracker.history().len(), 2);
        assert_eq!(tracker.history()[1].title(), "Budgets");
    }

    #[test]
    fn test_rejected_navigation_records_nothing() {
        let mut tracker = tracker();
        let result = tracker.navigate_to_route("budgets");
        assert!(matches!(result, Err(TrackerError::Router(_))));
        assert_eq!(tracker.history().len(), 1);
        assert_eq!(tracker.current_route(), "/");
    }

    #[test]
    fn test_route_query_becomes_data() {
        let mut tracker = tracker();
        tracker.record_route_change("/transactions?account=3&q=rent", "Transactions");
        let entry = tracker.state().last_entry().unwrap();
        assert_eq!(entry.path(), Some("/transactions?account=3&q=rent"));
        let data = entry.data().unwrap();
        assert_eq!(data.get_as::<u32>("account"), Some(3));
        assert_eq!(data.get("q"), Some("rent"));
    }

    #[test]
    fn test_close_modal_return_value() {
        let mut tracker = tracker();
        tracker.open_modal("m1", "T", None);
        assert!(tracker.close_modal("m1"));
        assert!(!tracker.close_modal("m1"));
    }

    #[test]
    fn test_recent_history_default_window() {
        let mut tracker = tracker();
        for i in 0..15 {
            tracker.switch_tab(format!("t{i}"), "T", None);
        }
        assert_eq!(tracker.recent_history_default().len(), 10);
        assert_eq!(tracker.recent_history(2)[1].tab_id(), Some("t14"));
    }
}
