//! Order status events
//!
//! A status change is a transient text value pushed to every subscriber at
//! the moment it happens. Nothing is recorded.

use std::fmt;
use uuid::Uuid;

/// Handle returned when subscribing, used to unsubscribe later
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn generate() -> Self { Self(Uuid::new_v4()) }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

pub type StatusListener = Box<dyn FnMut(&str)>;

/// Ordered registry of status-change callbacks.
#[derive(Default)]
pub struct StatusListeners {
    listeners: Vec<(SubscriptionId, StatusListener)>,
}

impl StatusListeners {
    pub fn new() -> Self { Self::default() }

    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId::generate();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Invokes every listener once, in registration order.
    pub fn broadcast(&mut self, status: &str) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(status);
        }
    }

    pub fn len(&self) -> usize { self.listeners.len() }
    pub fn is_empty(&self) -> bool { self.listeners.is_empty() }
}

impl fmt::Debug for StatusListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.listeners.iter().map(|(id, _)| id)).finish()
    }
}
