//! Derived navigation analytics.

use crate::entry::EntryKind;
use crate::state::NavigationState;

/// Snapshot of per-kind counts over the surviving history.
///
/// Counts are computed from the entries currently in history, not from a
/// running total, so evicted and cleared entries no longer contribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NavigationStats {
    pub total_navigations: usize,
    pub route_changes: usize,
    pub tab_switches: usize,
    pub modal_opens: usize,
    pub sidebar_navigations: usize,
    /// Modals open right now, independent of history.
    pub active_modals: usize,
    pub current_route: String,
    pub current_tab: Option<String>,
}

impl NavigationStats {
    /// Single pass over `state.history()`.
    pub fn from_state(state: &NavigationState) -> Self {
        let mut stats = NavigationStats {
            total_navigations: state.history().len(),
            active_modals: state.active_modals().len(),
            current_route: state.current_route().to_string(),
            current_tab: state.current_tab().map(str::to_string),
            ..NavigationStats::default()
        };

        for entry in state.history() {
            match entry.kind() {
                EntryKind::Route => stats.route_changes += 1,
                EntryKind::Tab => stats.tab_switches += 1,
                EntryKind::Modal => stats.modal_opens += 1,
                EntryKind::Sidebar => stats.sidebar_navigations += 1,
            }
        }

        stats
    }

    /// Count for one kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Route => self.route_changes,
            EntryKind::Tab => self.tab_switches,
            EntryKind::Modal => self.modal_opens,
            EntryKind::Sidebar => self.sidebar_navigations,
        }
    }

    /// Share of history taken by `kind`, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for an empty history.
    pub fn share(&self, kind: EntryKind) -> f64 {
        if self.total_navigations == 0 {
            0.0
        } else {
            self.count(kind) as f64 / self.total_navigations as f64
        }
    }
}
