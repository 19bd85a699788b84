//! Scoped subscriptions on the notification bus.

use crate::bus::event_bus::BusInner;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Identifier of a single registration on an [`EventBus`](super::EventBus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for an active subscription.
///
/// The registration is removed when [`dispose`](Self::dispose) is called or,
/// failing that, when the handle is dropped. Removal happens at most once and
/// takes effect before the call returns, so no publish issued afterwards can
/// reach the handler.
pub struct Subscription {
    id: SubscriptionId,
    event: String,
    registry: Arc<RwLock<BusInner>>,
    released: bool,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, event: String, registry: Arc<RwLock<BusInner>>) -> Self {
        Self {
            id,
            event,
            registry,
            released: false,
        }
    }

    /// The identifier of this registration.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The event name this subscription listens to.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Release the subscription.
    ///
    /// Consumes the handle, so a subscription can only be disposed once.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let removed = self.registry.write().remove(self.id);
        tracing::debug!(id = %self.id, event = %self.event, removed, "released subscription");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("released", &self.released)
            .finish()
    }
}
