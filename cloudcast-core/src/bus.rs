//! Same-thread publish/subscribe bus wiring the map widget to the chart.
//!
//! The bus holds one callback per subscriber identifier. Publishing invokes
//! every currently registered callback synchronously, on the caller's
//! stack, in unspecified order. There is no queuing, no backpressure, and
//! no cross-thread dispatch; the whole UI runs on one logical thread.
//!
//! The bus is an explicit value injected into the widgets that need it
//! (via Dioxus context in the apps), not process-wide state. Cloning a
//! bus clones a handle to the same subscriber table.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::event::LocationEvent;

type Callback = Rc<dyn Fn(&LocationEvent)>;
type Listeners = Rc<RefCell<HashMap<String, Callback>>>;

/// In-process publish/subscribe mechanism with synchronous, unordered
/// delivery to all current subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Listeners,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `id`, replacing any previous callback
    /// registered for the same identifier.
    ///
    /// The returned [`Subscription`] is the de-registration action.
    pub fn subscribe(
        &self,
        id: impl Into<String>,
        callback: impl Fn(&LocationEvent) + 'static,
    ) -> Subscription {
        let id = id.into();
        self.listeners
            .borrow_mut()
            .insert(id.clone(), Rc::new(callback));
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    /// Invoke every currently registered callback with `event`.
    ///
    /// Zero subscribers is a silent no-op. The subscriber table is
    /// snapshotted before the first invocation, so a callback may
    /// subscribe or unsubscribe while a publish is in flight.
    pub fn publish(&self, event: &LocationEvent) {
        let snapshot: Vec<Callback> = self.listeners.borrow().values().cloned().collect();
        log::debug!(
            "bus: publishing '{}' to {} subscriber(s)",
            event.id,
            snapshot.len()
        );
        for callback in snapshot {
            callback(event);
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// De-registration handle returned by [`EventBus::subscribe`].
///
/// Holds a weak reference to the subscriber table, so it stays valid (and
/// harmless) past the end of the bus's lifetime.
pub struct Subscription {
    listeners: Weak<RefCell<HashMap<String, Callback>>>,
    id: String,
}

impl Subscription {
    /// The subscriber identifier this handle was issued for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove this subscriber's callback from the bus.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().remove(&self.id);
        }
    }
}
