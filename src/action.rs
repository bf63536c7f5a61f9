//! Actions accepted by the navigation reducer.
//!
//! Every mutation of [`NavigationState`](crate::NavigationState) is expressed
//! as a [`NavigationAction`] and applied through
//! [`NavigationState::apply`](crate::NavigationState::apply). The tracker's
//! convenience methods (`switch_tab`, `open_modal`, ...) build entries and
//! dispatch these actions; hosts replaying a log can dispatch them directly.

use crate::entry::NavigationEntry;

/// A single state transition request.
///
/// Transitions are total: applying any action always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    /// Append an entry and update the matching "current" field.
    Record(NavigationEntry),

    /// Remove an open modal from the active set. No-op if not open.
    CloseModal {
        /// Id the modal was opened with.
        modal_id: String,
    },

    /// Empty history and active modals; current fields survive.
    ClearHistory,
}

impl NavigationAction {
    /// Record an entry.
    pub fn record(entry: NavigationEntry) -> Self {
        Self::Record(entry)
    }

    /// Close the modal opened with `modal_id`.
    pub fn close_modal(modal_id: impl Into<String>) -> Self {
        Self::CloseModal {
            modal_id: modal_id.into(),
        }
    }

    /// Short action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::CloseModal { .. } => "close_modal",
            Self::ClearHistory => "clear_history",
        }
    }
}

/// What a transition changed, beyond the state itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// Entries dropped from the front of history to respect the limit.
    pub evicted: Vec<NavigationEntry>,
    /// Modal entry removed from the active set (closed, or replaced by a reopen).
    pub closed_modal: Option<NavigationEntry>,
    /// Number of history entries removed by a clear.
    pub cleared: usize,
}
