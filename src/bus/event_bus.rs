//! Publish/subscribe registry for application events.

use crate::bus::subscription::{Subscription, SubscriptionId};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Type-erased event payload shared between every handler of one publish.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Type alias for registered handlers.
type Handler = Arc<dyn Fn(&Payload) + Send + Sync>;

/// One handler registered under an event name.
struct Registration {
    id: SubscriptionId,
    event: String,
    handler: Handler,
    /// Set on removal; checked by dispatches that copied the handler earlier
    released: Arc<AtomicBool>,
}

/// Internal bus state.
pub(crate) struct BusInner {
    subscribers: Vec<Registration>,
    next_id: u64,
}

impl BusInner {
    /// Remove a registration, returning whether it was present.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.subscribers.iter().position(|reg| reg.id == id) else {
            return false;
        };
        let registration = self.subscribers.remove(index);
        registration.released.store(true, Ordering::Release);
        true
    }
}

/// Notification bus shared by the views of one application.
///
/// The bus is an explicit object: clone it into every component that needs it
/// (all clones share the same registry). Publishing is synchronous, handlers
/// for the event run in the order they subscribed, before `publish` returns.
///
/// # Examples
///
/// ```rust
/// use entity_detail::bus::EventBus;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// let bus = EventBus::new();
/// let seen = Arc::new(AtomicU32::new(0));
///
/// let seen_clone = Arc::clone(&seen);
/// let subscription = bus.subscribe_to("myApp:counterUpdate", move |value: Arc<u32>| {
///     seen_clone.store(*value, Ordering::SeqCst);
/// });
///
/// bus.publish("myApp:counterUpdate", 7u32);
/// assert_eq!(seen.load(Ordering::SeqCst), 7);
///
/// // Unsubscribe
/// subscription.dispose();
/// ```
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<RwLock<BusInner>>,
}

impl EventBus {
    /// Create a new, empty bus.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BusInner {
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe to every publish of `event`.
    ///
    /// The handler receives the type-erased payload. Returns a handle that
    /// must be disposed (or dropped) to unsubscribe.
    pub fn subscribe<F>(&self, event: impl AsRef<str>, handler: F) -> Subscription
    where
        F: Fn(&Payload) + Send + Sync + 'static,
    {
        let event = event.as_ref().to_string();
        let handler: Handler = Arc::new(handler);
        let mut inner = self.inner.write();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push(Registration {
            id,
            event: event.clone(),
            handler,
            released: Arc::new(AtomicBool::new(false)),
        });
        drop(inner);

        tracing::debug!(%id, event = %event, "subscribed");
        Subscription::new(id, event, Arc::clone(&self.inner))
    }

    /// Subscribe to `event`, receiving only payloads of type `T`.
    ///
    /// Publishes of the same name carrying another payload type are skipped
    /// for this handler.
    pub fn subscribe_to<T, F>(&self, event: impl AsRef<str>, handler: F) -> Subscription
    where
        T: Any + Send + Sync,
        F: Fn(Arc<T>) + Send + Sync + 'static,
    {
        let event_name = event.as_ref().to_string();
        self.subscribe(event, move |payload| match Arc::clone(payload).downcast::<T>() {
            Ok(typed) => handler(typed),
            Err(_) => {
                tracing::debug!(
                    event = %event_name,
                    expected = std::any::type_name::<T>(),
                    "ignoring payload of unexpected type"
                );
            }
        })
    }

    /// Publish `payload` under `event`.
    ///
    /// Returns the number of handlers invoked. The registry lock is released
    /// before handlers run, so a handler may publish or unsubscribe. A handler
    /// unsubscribed by an earlier handler of the same publish is skipped.
    pub fn publish<T>(&self, event: impl AsRef<str>, payload: T) -> usize
    where
        T: Any + Send + Sync,
    {
        self.publish_shared(event, Arc::new(payload))
    }

    /// Publish an already shared payload under `event`.
    pub fn publish_shared(&self, event: impl AsRef<str>, payload: Payload) -> usize {
        let event = event.as_ref();
        let handlers: Vec<(Handler, Arc<AtomicBool>)> = {
            let inner = self.inner.read();
            inner
                .subscribers
                .iter()
                .filter(|reg| reg.event == event)
                .map(|reg| (Arc::clone(&reg.handler), Arc::clone(&reg.released)))
                .collect()
        };

        tracing::trace!(event, handlers = handlers.len(), "publishing");
        let mut invoked = 0;
        for (handler, released) in &handlers {
            if released.load(Ordering::Acquire) {
                continue;
            }
            handler(&payload);
            invoked += 1;
        }
        invoked
    }

    /// Get the number of active subscriptions across all events.
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().subscribers.len()
    }

    /// Check whether a subscription is still registered.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .read()
            .subscribers
            .iter()
            .any(|reg| reg.id == id)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
