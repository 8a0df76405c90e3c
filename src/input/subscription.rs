//! Scoped event subscriptions.
//!
//! Operations register interest in pointer-event topics through an
//! [`EventBus`]. Each registration is a [`Subscription`] guard that unregisters
//! itself when dropped, so an operation that is finished, cancelled or simply
//! dropped can never leave a listener behind.

use super::events::PointerKind;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Event stream an operation can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    PointerDown,
    PointerMove,
    PointerUp,
}

impl From<PointerKind> for Topic {
    fn from(kind: PointerKind) -> Self {
        match kind {
            PointerKind::Down => Topic::PointerDown,
            PointerKind::Move => Topic::PointerMove,
            PointerKind::Up => Topic::PointerUp,
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Topic>,
}

/// Single-threaded listener registry shared by the session and its operations.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `topic`; it stays live until the guard drops.
    #[must_use = "dropping the subscription unregisters it immediately"]
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, topic);
        log::trace!("subscribed #{id} to {topic:?}");
        Subscription {
            id,
            topic,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Whether any live listener wants `topic`.
    pub fn is_subscribed(&self, topic: Topic) -> bool {
        self.registry
            .borrow()
            .listeners
            .values()
            .any(|listener| *listener == topic)
    }

    /// Number of live listeners across all topics.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard for one registered listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    topic: Topic,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            log::trace!("released #{} from {:?}", self.id, self.topic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_the_guard_unregisters() {
        let bus = EventBus::new();
        let down = bus.subscribe(Topic::PointerDown);
        let moves = bus.subscribe(Topic::PointerMove);
        assert_eq!(bus.listener_count(), 2);
        assert!(bus.is_subscribed(Topic::PointerDown));
        assert!(!bus.is_subscribed(Topic::PointerUp));

        drop(down);
        assert!(!bus.is_subscribed(Topic::PointerDown));
        assert_eq!(moves.topic(), Topic::PointerMove);
        drop(moves);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn two_listeners_on_one_topic_are_independent() {
        let bus = EventBus::new();
        let a = bus.subscribe(Topic::PointerDown);
        let b = bus.subscribe(Topic::PointerDown);
        drop(a);
        assert!(bus.is_subscribed(Topic::PointerDown));
        drop(b);
        assert!(!bus.is_subscribed(Topic::PointerDown));
    }

    #[test]
    fn guard_outliving_the_bus_is_harmless() {
        let bus = EventBus::new();
        let sub = bus.subscribe(Topic::PointerUp);
        drop(bus);
        drop(sub);
    }
}
