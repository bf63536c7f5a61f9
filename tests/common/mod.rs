//! Shared fixtures for integration tests.

#![allow(dead_code)]

use navigation_tracker::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Route test logging through the test harness' captured output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tracker over a [`MemoryRouter`] starting at `/`.
pub fn tracker() -> NavigationTracker {
    init_logging();
    NavigationTracker::new(TrackerConfig::default(), MemoryRouter::default())
}

/// Tracker over a [`MemoryRouter`] with a custom history limit.
pub fn tracker_with_limit(limit: usize) -> NavigationTracker {
    init_logging();
    let config = TrackerConfig::with_history_limit(limit).expect("valid limit");
    NavigationTracker::new(config, MemoryRouter::default())
}

/// Tab ids of the given entries, in order.
pub fn tab_ids<'a>(entries: impl IntoIterator<Item = &'a NavigationEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|e| e.tab_id().map(str::to_string))
        .collect()
}

/// Kinds of the given entries, in order.
pub fn kinds<'a>(entries: impl IntoIterator<Item = &'a NavigationEntry>) -> Vec<EntryKind> {
    entries.into_iter().map(NavigationEntry::kind).collect()
}

/// What a [`ScriptedRouter`] has been asked to do, shared with the test.
#[derive(Debug, Default)]
pub struct RouterScript {
    pub requests: Vec<String>,
    pub fail_with: Option<RouterError>,
}

/// Router double that behaves like an asynchronous platform router: requests
/// are only reported when the test calls [`ScriptedRouter::deliver`], unless
/// created with `immediate = true`.
pub struct ScriptedRouter {
    path: String,
    immediate: bool,
    publishers: Vec<LocationPublisher>,
    pending: Vec<LocationChange>,
    pub script: Rc<RefCell<RouterScript>>,
}

impl ScriptedRouter {
    pub fn new(path: &str, immediate: bool) -> Self {
        Self {
            path: path.to_string(),
            immediate,
            publishers: Vec::new(),
            pending: Vec::new(),
            script: Rc::new(RefCell::new(RouterScript::default())),
        }
    }

    /// Report all pending navigations to subscribers.
    pub fn deliver(&mut self) {
        for change in std::mem::take(&mut self.pending) {
            self.emit(change);
        }
    }

    /// Simulate a location change the application did not request.
    pub fn external_change(&mut self, change: LocationChange) {
        self.path = change.path.clone();
        self.emit(change);
    }

    fn emit(&mut self, change: LocationChange) {
        self.publishers
            .retain(|publisher| publisher.publish(change.clone()));
    }
}

impl Router for ScriptedRouter {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, path: &str) -> Result<(), RouterError> {
        let mut script = self.script.borrow_mut();
        if let Some(err) = script.fail_with.take() {
            return Err(err);
        }
        script.requests.push(path.to_string());
        drop(script);

        self.path = path.to_string();
        let change = LocationChange::new(path);
        if self.immediate {
            self.emit(change);
        } else {
            self.pending.push(change);
        }
        Ok(())
    }

    fn subscribe(&mut self) -> LocationSubscription {
        let (publisher, subscription) = location_channel();
        publisher.publish(LocationChange::new(self.path.clone()));
        self.publishers.push(publisher);
        subscription
    }
}
