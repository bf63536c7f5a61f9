//! Router collaborator abstraction.
//!
//! The tracker never decides where the application is; the router does. This
//! module defines the capability the tracker needs from a router:
//!
//! - [`Router::current_path`]: where the application is now
//! - [`Router::navigate`]: request a navigation
//! - [`Router::subscribe`]: a [`LocationSubscription`] that first yields the
//!   current location and then every later change
//!
//! [`MemoryRouter`] is a complete in-process implementation with a
//! back/forward stack, used by tests and by hosts without a platform router.
//!
//! ```
//! use navigation_tracker::{MemoryRouter, Router};
//!
//! let mut router = MemoryRouter::new("/");
//! let mut subscription = router.subscribe();
//!
//! router.navigate("/accounts").unwrap();
//! router.back().unwrap();
//!
//! let paths: Vec<String> = subscription.drain().into_iter().map(|c| c.path).collect();
//! assert_eq!(paths, vec!["/", "/accounts", "/"]);
//! ```

use crate::error::{HistoryDirection, RouterError};
use crate::{trace_log, warn_log};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// One location reported by a router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationChange {
    /// Full location, possibly with a `?query`.
    pub path: String,
    /// Title supplied by the router, if it knows one.
    pub title: Option<String>,
}

impl LocationChange {
    /// Location without a title.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
        }
    }

    /// Location with a router-supplied title.
    pub fn with_title(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: Some(title.into()),
        }
    }
}

/// Create a connected publisher/subscription pair.
///
/// Router implementations keep the [`LocationPublisher`] and hand the
/// [`LocationSubscription`] to the subscriber.
pub fn location_channel() -> (LocationPublisher, LocationSubscription) {
    let (sender, receiver) = mpsc::channel();
    (
        LocationPublisher { sender },
        LocationSubscription {
            receiver,
            disconnected: false,
        },
    )
}

/// Sending half of a location subscription.
#[derive(Debug, Clone)]
pub struct LocationPublisher {
    sender: Sender<LocationChange>,
}

impl LocationPublisher {
    /// Deliver a change. Returns `false` if the subscription has been dropped.
    pub fn publish(&self, change: LocationChange) -> bool {
        self.sender.send(change).is_ok()
    }
}

/// Receiving half of a location subscription.
///
/// Changes are queued in arrival order until drained.
#[derive(Debug)]
pub struct LocationSubscription {
    receiver: Receiver<LocationChange>,
    disconnected: bool,
}

impl LocationSubscription {
    /// Take every queued change without blocking.
    pub fn drain(&mut self) -> Vec<LocationChange> {
        let mut changes = Vec::new();
        while let Some(change) = self.try_next() {
            changes.push(change);
        }
        changes
    }

    /// Take the next queued change without blocking.
    pub fn try_next(&mut self) -> Option<LocationChange> {
        match self.receiver.try_recv() {
            Ok(change) => Some(change),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.disconnected {
                    warn_log!("Router dropped its location publisher");
                    self.disconnected = true;
                }
                None
            }
        }
    }

    /// Whether the router side is gone.
    ///
    /// Only known once a [`try_next`](Self::try_next) or [`drain`](Self::drain)
    /// has read past the last queued change.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

/// Capability the tracker needs from the host router.
pub trait Router {
    /// Location the router is currently showing.
    fn current_path(&self) -> String;

    /// Request navigation to `path`.
    ///
    /// Implementations report the resulting location through their
    /// subscriptions; the caller does not record anything itself.
    fn navigate(&mut self, path: &str) -> Result<(), RouterError>;

    /// Subscribe to location changes.
    ///
    /// The subscription must yield the current location first.
    fn subscribe(&mut self) -> LocationSubscription;
}

// ============================================================================
// MemoryRouter
// ============================================================================

/// In-memory router with browser-style back/forward history.
#[derive(Debug)]
pub struct MemoryRouter {
    /// Navigation history stack
    stack: Vec<String>,
    /// Current position in the stack
    current: usize,
    subscribers: Vec<LocationPublisher>,
}

impl MemoryRouter {
    /// Router positioned at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            stack: vec![initial.into()],
            current: 0,
            subscribers: Vec::new(),
        }
    }

    fn validate(path: &str) -> Result<(), RouterError> {
        if path.starts_with('/') {
            Ok(())
        } else {
            Err(RouterError::InvalidPath {
                path: path.to_string(),
            })
        }
    }

    /// Send the current location to every live subscriber, pruning dead ones.
    fn broadcast(&mut self) {
        let change = LocationChange::new(self.stack[self.current].clone());
        let before = self.subscribers.len();
        self.subscribers
            .retain(|subscriber| subscriber.publish(change.clone()));
        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            trace_log!("Pruned {} closed location subscription(s)", pruned);
        }
    }

    /// Push a new location, discarding any forward history.
    pub fn push(&mut self, path: impl Into<String>) -> Result<(), RouterError> {
        let path = path.into();
        Self::validate(&path)?;
        self.stack.truncate(self.current + 1);
        self.stack.push(path);
        self.current += 1;
        self.broadcast();
        Ok(())
    }

    /// Replace the current location in place.
    pub fn replace(&mut self, path: impl Into<String>) -> Result<(), RouterError> {
        let path = path.into();
        Self::validate(&path)?;
        self.stack[self.current] = path;
        self.broadcast();
        Ok(())
    }

    /// Step back one location.
    pub fn back(&mut self) -> Result<(), RouterError> {
        if !self.can_go_back() {
            return Err(RouterError::NoHistory {
                direction: HistoryDirection::Back,
            });
        }
        self.current -= 1;
        self.broadcast();
        Ok(())
    }

    /// Step forward one location.
    pub fn forward(&mut self) -> Result<(), RouterError> {
        if !self.can_go_forward() {
            return Err(RouterError::NoHistory {
                direction: HistoryDirection::Forward,
            });
        }
        self.current += 1;
        self.broadcast();
        Ok(())
    }

    /// Check if back navigation is possible.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if forward navigation is possible.
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.stack.len()
    }

    /// Number of live subscriptions as of the last broadcast.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.stack[self.current].clone()
    }

    fn navigate(&mut self, path: &str) -> Result<(), RouterError> {
        self.push(path)
    }

    fn subscribe(&mut self) -> LocationSubscription {
        let (publisher, subscription) = location_channel();
        publisher.publish(LocationChange::new(self.current_path()));
        self.subscribers.push(publisher);
        subscription
    }
}
