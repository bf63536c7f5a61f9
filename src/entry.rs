//! Navigation entries: immutable records of one navigation event.

use crate::data::EntryData;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a [`NavigationEntry`].
///
/// Drawn from a process-wide monotonic counter, so ids are unique across every
/// tracker in the process and increase in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nav-{}", self.0)
    }
}

/// Kind of navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EntryKind {
    Route,
    Tab,
    Modal,
    Sidebar,
}

impl EntryKind {
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Route,
        EntryKind::Tab,
        EntryKind::Modal,
        EntryKind::Sidebar,
    ];

    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Route => "route",
            EntryKind::Tab => "tab",
            EntryKind::Modal => "modal",
            EntryKind::Sidebar => "sidebar",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific destination of an entry.
///
/// `route` / `parent_route` hold the route that was current when the tab,
/// modal or sidebar event happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum EntryTarget {
    Route { path: String },
    Tab { tab_id: String, route: String },
    Modal { modal_id: String, parent_route: String },
    Sidebar { path: String, route: String },
}

impl EntryTarget {
    /// Kind of this target.
    pub fn kind(&self) -> EntryKind {
        match self {
            EntryTarget::Route { .. } => EntryKind::Route,
            EntryTarget::Tab { .. } => EntryKind::Tab,
            EntryTarget::Modal { .. } => EntryKind::Modal,
            EntryTarget::Sidebar { .. } => EntryKind::Sidebar,
        }
    }
}

/// One recorded navigation event.
///
/// Entries are created by the [`NavigationTracker`](crate::NavigationTracker)
/// and never change afterwards.
///
/// ```
/// use navigation_tracker::{EntryKind, NavigationEntry};
///
/// let entry = NavigationEntry::tab("categories", "Categories", "/budgets", None);
/// assert_eq!(entry.kind(), EntryKind::Tab);
/// assert_eq!(entry.tab_id(), Some("categories"));
/// assert_eq!(entry.parent_route(), Some("/budgets"));
/// assert_eq!(entry.path(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NavigationEntry {
    id: EntryId,
    timestamp: DateTime<Utc>,
    title: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    target: EntryTarget,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    data: Option<EntryData>,
}

impl NavigationEntry {
    fn new(target: EntryTarget, title: impl Into<String>, data: Option<EntryData>) -> Self {
        Self {
            id: EntryId::next(),
            timestamp: Utc::now(),
            title: title.into(),
            target,
            data,
        }
    }

    /// Create a Route entry.
    pub fn route(path: impl Into<String>, title: impl Into<String>, data: Option<EntryData>) -> Self {
        Self::new(EntryTarget::Route { path: path.into() }, title, data)
    }

    /// Create a Tab entry under `route`.
    pub fn tab(
        tab_id: impl Into<String>,
        title: impl Into<String>,
        route: impl Into<String>,
        data: Option<EntryData>,
    ) -> Self {
        let target = EntryTarget::Tab {
            tab_id: tab_id.into(),
            route: route.into(),
        };
        Self::new(target, title, data)
    }

    /// Create a Modal entry opened over `parent_route`.
    pub fn modal(
        modal_id: impl Into<String>,
        title: impl Into<String>,
        parent_route: impl Into<String>,
        data: Option<EntryData>,
    ) -> Self {
        let target = EntryTarget::Modal {
            modal_id: modal_id.into(),
            parent_route: parent_route.into(),
        };
        Self::new(target, title, data)
    }

    /// Create a Sidebar entry under `route`.
    pub fn sidebar(
        path: impl Into<String>,
        title: impl Into<String>,
        route: impl Into<String>,
        data: Option<EntryData>,
    ) -> Self {
        let target = EntryTarget::Sidebar {
            path: path.into(),
            route: route.into(),
        };
        Self::new(target, title, data)
    }

    /// Get the entry id.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Get the entry kind.
    pub fn kind(&self) -> EntryKind {
        self.target.kind()
    }

    /// Get the creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Get the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the kind-specific target.
    pub fn target(&self) -> &EntryTarget {
        &self.target
    }

    /// Get the attached payload, if any.
    pub fn data(&self) -> Option<&EntryData> {
        self.data.as_ref()
    }

    /// Destination path for Route and Sidebar entries.
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            EntryTarget::Route { path } | EntryTarget::Sidebar { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Tab id for Tab entries.
    pub fn tab_id(&self) -> Option<&str> {
        match &self.target {
            EntryTarget::Tab { tab_id, .. } => Some(tab_id),
            _ => None,
        }
    }

    /// Modal id for Modal entries.
    pub fn modal_id(&self) -> Option<&str> {
        match &self.target {
            EntryTarget::Modal { modal_id, .. } => Some(modal_id),
            _ => None,
        }
    }

    /// Route that was current when a Tab, Modal or Sidebar event happened.
    pub fn parent_route(&self) -> Option<&str> {
        match &self.target {
            EntryTarget::Tab { route, .. }
            | EntryTarget::Sidebar { route, .. }
            | EntryTarget::Modal {
                parent_route: route,
                ..
            } => Some(route),
            EntryTarget::Route { .. } => None,
        }
    }

    /// Timestamp formatted as RFC 3339 / ISO-8601.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
