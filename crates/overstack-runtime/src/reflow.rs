#![forbid(unsafe_code)]

//! Cross-overlay reflow broadcast.
//!
//! Any overlay may subscribe to the bus, and any overlay may trigger it. A
//! trigger carries no payload; it only means "recompute your position now".
//!
//! # Invariants
//!
//! 1. Listeners are notified in subscription order.
//! 2. Dropping a [`ReflowSubscription`] removes its listener before the next
//!    trigger.
//! 3. Listeners run outside the bus borrow, so a listener may subscribe,
//!    unsubscribe, or trigger again without panicking. Re-entrant triggers
//!    notify the listener set as it exists at that moment.
//!
//! # Failure Modes
//!
//! - Triggering with no listeners is a no-op.
//! - A subscription outliving its bus is inert; dropping it does nothing.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = dyn Fn();

struct BusInner {
    listeners: RefCell<Vec<(u64, Weak<Listener>)>>,
    next_id: Cell<u64>,
}

/// Shared handle to a reflow broadcast channel.
///
/// Cloning the handle shares the same channel.
#[derive(Clone)]
pub struct ReflowBus {
    inner: Rc<BusInner>,
}

impl Default for ReflowBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReflowBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflowBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ReflowBus {
    /// Create an isolated bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Register a listener. It stays registered until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ReflowSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Rc<Listener> = Rc::new(listener);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::downgrade(&listener)));

        ReflowSubscription {
            id,
            _listener: listener,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Ask every live listener to recompute. Returns how many were notified.
    pub fn trigger(&self) -> usize {
        let live: Vec<Rc<Listener>> = {
            let mut listeners = self.inner.listeners.borrow_mut();
            listeners.retain(|(_, weak)| weak.strong_count() > 0);
            listeners.iter().filter_map(|(_, weak)| weak.upgrade()).collect()
        };

        tracing::trace!(listeners = live.len(), "reflow broadcast");
        for listener in &live {
            listener();
        }
        live.len()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }
}

/// RAII guard for a reflow listener. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ReflowSubscription {
    id: u64,
    _listener: Rc<Listener>,
    bus: Weak<BusInner>,
}

impl fmt::Debug for ReflowSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflowSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for ReflowSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_notifies_every_listener() {
        let bus = ReflowBus::new();
        let hits = Rc::new(Cell::new(0));

        let h1 = Rc::clone(&hits);
        let _a = bus.subscribe(move || h1.set(h1.get() + 1));
        let h2 = Rc::clone(&hits);
        let _b = bus.subscribe(move || h2.set(h2.get() + 10));

        assert_eq!(bus.trigger(), 2);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = ReflowBus::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = bus.subscribe(move || h.set(h.get() + 1));
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.trigger(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let bus = ReflowBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<_> = (0..3)
            .map(|n| {
                let order = Rc::clone(&order);
                bus.subscribe(move || order.borrow_mut().push(n))
            })
            .collect();

        bus.trigger();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn listener_may_retrigger_without_panicking() {
        let bus = ReflowBus::new();
        let depth = Rc::new(Cell::new(0));
        let inner_bus = bus.clone();
        let d = Rc::clone(&depth);
        let _sub = bus.subscribe(move || {
            d.set(d.get() + 1);
            if d.get() < 3 {
                inner_bus.trigger();
            }
        });

        bus.trigger();
        assert_eq!(depth.get(), 3);
    }

    #[test]
    fn subscription_outliving_bus_is_inert() {
        let bus = ReflowBus::new();
        let sub = bus.subscribe(|| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn clones_share_the_channel() {
        let bus = ReflowBus::new();
        let other = bus.clone();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _sub = other.subscribe(move || h.set(h.get() + 1));
        bus.trigger();
        assert_eq!(hits.get(), 1);
    }
}
