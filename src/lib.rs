//! # entity-detail
//!
//! Entity detail view-models kept current by an explicit notification bus,
//! plus thin REST resource proxies for a generated CRUD admin front-end.
//!
//! ## Overview
//!
//! - [`bus::EventBus`]: synchronous publish/subscribe with scoped
//!   [`bus::Subscription`]s that are released exactly once
//! - [`core::EntityDetailView`]: holds one entity and replaces it on every
//!   `<namespace>:<entityType>Update` event until its [`core::ViewScope`] is
//!   destroyed
//! - [`resources`]: `Password`, `Register` and entity resources bound to fixed
//!   endpoints (feature `resources`)
//! - [`settings::Settings`]: namespace and API location from files and env
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_detail::prelude::*;
//!
//! let settings = Settings::default();
//! let bus = EventBus::new();
//! let scope = ViewScope::new("employee-detail");
//!
//! let vm = EmployeeDetailView::new(
//!     Employee::new(7, "Ada"),
//!     Some("employee".to_string()),
//!     &settings.namespace,
//!     &bus,
//!     &scope,
//! );
//!
//! // Somewhere else, after a successful save
//! bus.publish(settings.update_event::<Employee>(), Employee::new(7, "Ada Lovelace"));
//! assert_eq!(vm.employee().name, "Ada Lovelace");
//!
//! // View teardown
//! scope.destroy();
//! assert!(!vm.is_subscribed());
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod bus;
pub mod core;
pub mod entities;
pub mod error;
pub mod settings;

#[cfg(feature = "resources")]
pub mod resources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::bus::{EventBus, EventName, Subscription};
    pub use crate::core::{DepartmentDetailView, EmployeeDetailView, EntityDetailView, ViewScope};
    pub use crate::entities::{Department, Employee, Entity};
    pub use crate::error::{DetailError, Result};
    pub use crate::settings::Settings;

    #[cfg(feature = "resources")]
    pub use crate::resources::{Password, Register, Resource, ResourceClient};
}
