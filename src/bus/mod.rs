//! Application notification bus.
//!
//! Provides an explicit publish/subscribe channel for "entity updated" events
//! and scoped subscriptions that are released exactly once.

pub mod event_bus;
pub mod event_name;
pub mod subscription;

pub use event_bus::{EventBus, Payload};
pub use event_name::EventName;
pub use subscription::{Subscription, SubscriptionId};
