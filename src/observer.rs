//! Observers notified after every tracker transition.
//!
//! Observers handle side effects that should follow navigation without living
//! in the reducer: analytics beacons, persisting the last visited page,
//! refreshing a breadcrumb widget.
//!
//! All methods are **synchronous** and run after the state has changed, so an
//! observer always sees the post-transition state through the entry it is
//! given. Observers run in **priority order** (higher
//! [`priority`](NavigationObserver::priority) first); equal priorities keep
//! registration order.
//!
//! | Approach | When to use |
//! |----------|-------------|
//! | Implement [`NavigationObserver`] | Full control over every event |
//! | [`observer_fn`] | Only care about appended entries |
//!
//! ```
//! use navigation_tracker::{observer_fn, MemoryRouter, NavigationTracker, TrackerConfig};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut tracker = NavigationTracker::new(TrackerConfig::default(), MemoryRouter::default());
//! tracker.add_observer(observer_fn(move |entry| {
//!     sink.lock().unwrap().push(entry.title().to_string());
//! }));
//!
//! tracker.switch_tab("income", "Income", None);
//! assert_eq!(*seen.lock().unwrap(), vec!["Income"]);
//! ```

use crate::entry::NavigationEntry;

/// Receives tracker events after they have been applied.
///
/// Observers must be `Send` so a tracker can live behind a `Mutex` shared
/// across threads.
pub trait NavigationObserver: Send + 'static {
    /// An entry was appended. `evicted` holds entries dropped to make room.
    fn on_entry(&mut self, entry: &NavigationEntry, evicted: &[NavigationEntry]);

    /// A modal left the active set.
    fn on_modal_closed(&mut self, _modal: &NavigationEntry) {}

    /// History was cleared; `removed` entries were dropped.
    fn on_history_cleared(&mut self, _removed: usize) {}

    /// Observer name for debugging.
    fn name(&self) -> &'static str {
        "NavigationObserver"
    }

    /// Higher runs first.
    fn priority(&self) -> i32 {
        0
    }
}

/// Create an observer from a closure over appended entries.
pub const fn observer_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(&NavigationEntry) + Send + 'static,
{
    FnObserver { f }
}

/// Observer created via [`observer_fn`].
pub struct FnObserver<F> {
    f: F,
}

impl<F> NavigationObserver for FnObserver<F>
where
    F: FnMut(&NavigationEntry) + Send + 'static,
{
    fn on_entry(&mut self, entry: &NavigationEntry, _evicted: &[NavigationEntry]) {
        (self.f)(entry);
    }

    fn name(&self) -> &'static str {
        "FnObserver"
    }
}

/// Ordered set of observers.
#[derive(Default)]
pub(crate) struct Observers {
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl Observers {
    /// Insert keeping descending priority, stable for equal priorities.
    pub(crate) fn add(&mut self, observer: Box<dyn NavigationObserver>) {
        let priority = observer.priority();
        let index = self
            .observers
            .iter()
            .position(|existing| existing.priority() < priority)
            .unwrap_or(self.observers.len());
        self.observers.insert(index, observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    pub(crate) fn entry(&mut self, entry: &NavigationEntry, evicted: &[NavigationEntry]) {
        for observer in &mut self.observers {
            observer.on_entry(entry, evicted);
        }
    }

    pub(crate) fn modal_closed(&mut self, modal: &NavigationEntry) {
        for observer in &mut self.observers {
            observer.on_modal_closed(modal);
        }
    }

    pub(crate) fn history_cleared(&mut self, removed: usize) {
        for observer in &mut self.observers {
            observer.on_history_cleared(removed);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recording {
        label: &'static str,
        priority: i32,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl NavigationObserver for Recording {
        fn on_entry(&mut self, entry: &NavigationEntry, _evicted: &[NavigationEntry]) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, entry.title()));
        }

        fn on_modal_closed(&mut self, modal: &NavigationEntry) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:closed:{}", self.label, modal.modal_id().unwrap_or("")));
        }

        fn on_history_cleared(&mut self, removed: usize) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:cleared:{}", self.label, removed));
        }

        fn name(&self) -> &'static str {
            self.label
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    fn recording(label: &'static str, priority: i32, log: &Arc<Mutex<Vec<String>>>) -> Box<Recording> {
        Box::new(Recording {
            label,
            priority,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn test_priority_order_is_stable() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        observers.add(recording("low", -5, &log));
        observers.add(recording("first", 10, &log));
        observers.add(recording("second", 10, &log));
        observers.add(recording("mid", 0, &log));

        assert_eq!(observers.names(), vec!["first", "second", "mid", "low"]);
        assert_eq!(observers.len(), 4);
    }

    #[test]
    fn test_dispatch_reaches_every_hook() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        observers.add(recording("a", 0, &log));

        let modal = NavigationEntry::modal("m", "Modal", "/", None);
        observers.entry(&modal, &[]);
        observers.modal_closed(&modal);
        observers.history_cleared(3);

        let log = log.lock().unwrap();
        assert_eq!(*log, vec!["a:Modal", "a:closed:m", "a:cleared:3"]);
    }

    #[test]
    fn test_observer_fn() {
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let mut observer = observer_fn(move |_entry: &NavigationEntry| {
            *sink.lock().unwrap() += 1;
        });

        let entry = NavigationEntry::route("/", "Home", None);
        observer.on_entry(&entry, &[]);
        observer.on_modal_closed(&entry);
        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(observer.name(), "FnObserver");
    }
}
