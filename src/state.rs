//! Navigation state and its reducer.
//!
//! [`NavigationState`] is the single mutable unit of the crate. It only
//! changes through [`NavigationState::apply`]; everything else is a read.

use crate::action::{NavigationAction, Transition};
use crate::config::TrackerConfig;
use crate::entry::{EntryKind, EntryTarget, NavigationEntry};
use crate::stats::NavigationStats;
use crate::{debug_log, trace_log, warn_log};
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

/// Default window for [`NavigationState::recent_history`] callers that have no preference.
pub const DEFAULT_RECENT_COUNT: usize = 10;

/// Bounded navigation log plus the "current" UI facts derived from it.
///
/// Invariants:
/// - `history.len() <= history_limit` after every transition; the oldest
///   entries are evicted first.
/// - `active_modals` holds at most one entry per modal id and is not subject
///   to history eviction.
/// - `current_route`, `current_tab` and `sidebar_state` always reflect the
///   latest matching action, even after its entry has been evicted or the
///   history cleared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct NavigationState {
    history: VecDeque<NavigationEntry>,
    active_modals: Vec<NavigationEntry>,
    current_route: String,
    current_tab: Option<String>,
    sidebar_state: Option<String>,
    history_limit: NonZeroUsize,
}

impl NavigationState {
    /// Create an empty state positioned at the configured landing path.
    pub fn new(config: &TrackerConfig) -> Self {
        let limit = NonZeroUsize::new(config.history_limit()).unwrap_or(NonZeroUsize::MIN);
        Self {
            history: VecDeque::with_capacity(limit.get().min(1024)),
            active_modals: Vec::new(),
            current_route: config.landing_path().to_string(),
            current_tab: None,
            sidebar_state: None,
            history_limit: limit,
        }
    }

    /// Apply one action. Never fails.
    pub fn apply(&mut self, action: NavigationAction) -> Transition {
        trace_log!("Applying '{}' action", action.name());
        let mut transition = Transition::default();

        match action {
            NavigationAction::Record(entry) => {
                match entry.target() {
                    EntryTarget::Route { path } => self.current_route = path.clone(),
                    EntryTarget::Tab { tab_id, .. } => self.current_tab = Some(tab_id.clone()),
                    EntryTarget::Sidebar { path, .. } => self.sidebar_state = Some(path.clone()),
                    EntryTarget::Modal { modal_id, .. } => {
                        if let Some(index) = self.active_modal_index(modal_id) {
                            warn_log!("Modal '{}' reopened while still open", modal_id);
                            transition.closed_modal = Some(self.active_modals.remove(index));
                        }
                        self.active_modals.push(entry.clone());
                    }
                }

                debug_log!(
                    "Recorded {} entry {} '{}'",
                    entry.kind(),
                    entry.id(),
                    entry.title()
                );
                self.history.push_back(entry);
                transition.evicted = self.enforce_limit();
            }
            NavigationAction::CloseModal { modal_id } => {
                if let Some(index) = self.active_modal_index(&modal_id) {
                    debug_log!("Closed modal '{}'", modal_id);
                    transition.closed_modal = Some(self.active_modals.remove(index));
                } else {
                    trace_log!("Modal '{}' is not open; nothing to close", modal_id);
                }
            }
            NavigationAction::ClearHistory => {
                transition.cleared = self.history.len();
                self.history.clear();
                self.active_modals.clear();
            }
        }

        transition
    }

    fn active_modal_index(&self, modal_id: &str) -> Option<usize> {
        self.active_modals
            .iter()
            .position(|entry| entry.modal_id() == Some(modal_id))
    }

    /// Drop entries from the front until the limit holds.
    fn enforce_limit(&mut self) -> Vec<NavigationEntry> {
        let excess = self.history.len().saturating_sub(self.history_limit.get());
        let evicted: Vec<NavigationEntry> = self.history.drain(..excess).collect();
        if !evicted.is_empty() {
            debug_log!(
                "Evicted {} entr{} (limit {})",
                evicted.len(),
                if evicted.len() == 1 { "y" } else { "ies" },
                self.history_limit
            );
        }
        evicted
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Full surviving history, oldest first.
    pub fn history(&self) -> &VecDeque<NavigationEntry> {
        &self.history
    }

    /// Modals currently open, in opening order.
    pub fn active_modals(&self) -> &[NavigationEntry] {
        &self.active_modals
    }

    /// Get current route.
    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    /// Get current tab, if any.
    pub fn current_tab(&self) -> Option<&str> {
        self.current_tab.as_deref()
    }

    /// Get current sidebar path, if any.
    pub fn sidebar_state(&self) -> Option<&str> {
        self.sidebar_state.as_deref()
    }

    /// Maximum number of history entries.
    pub fn history_limit(&self) -> usize {
        self.history_limit.get()
    }

    /// The last `count` entries, oldest of the window first.
    ///
    /// Returns the whole history when `count` exceeds its length.
    pub fn recent_history(&self, count: usize) -> Vec<&NavigationEntry> {
        let skip = self.history.len().saturating_sub(count);
        self.history.iter().skip(skip).collect()
    }

    /// Most recently appended entry still in history.
    pub fn last_entry(&self) -> Option<&NavigationEntry> {
        self.history.back()
    }

    /// Check if a modal is open.
    pub fn is_modal_open(&self, modal_id: &str) -> bool {
        self.active_modal_index(modal_id).is_some()
    }

    /// Get the active entry of an open modal.
    pub fn active_modal(&self, modal_id: &str) -> Option<&NavigationEntry> {
        self.active_modal_index(modal_id)
            .map(|index| &self.active_modals[index])
    }

    /// Surviving entries of one kind, oldest first.
    pub fn entries_of_kind(
        &self,
        kind: EntryKind,
    ) -> impl DoubleEndedIterator<Item = &NavigationEntry> + '_ {
        self.history.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Path of the route visited before the latest one still in history.
    pub fn previous_route(&self) -> Option<&str> {
        self.entries_of_kind(EntryKind::Route)
            .rev()
            .nth(1)
            .and_then(NavigationEntry::path)
    }

    /// Route entry counts per path, most visited first, ties by path.
    pub fn route_visit_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for path in self
            .entries_of_kind(EntryKind::Route)
            .filter_map(NavigationEntry::path)
        {
            *counts.entry(path).or_insert(0) += 1;
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(path, count)| (path.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Per-kind counts over surviving history. Recomputed on every call.
    pub fn stats(&self) -> NavigationStats {
        NavigationStats::from_state(self)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}
