//! Entity detail view-models kept current by update events.

use crate::bus::{EventBus, EventName, SubscriptionId};
use crate::core::ViewScope;
use crate::entities::{Department, Employee, Entity};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// View-model presenting one entity and keeping it current.
///
/// On construction the view subscribes to `<namespace>:<entityType>Update` and
/// hands the subscription to the view's [`ViewScope`]. Every matching publish
/// replaces the held entity wholesale. Once the scope is destroyed, further
/// publishes leave the entity untouched.
///
/// # Examples
///
/// ```rust
/// use entity_detail::prelude::*;
///
/// let bus = EventBus::new();
/// let scope = ViewScope::new("department-detail");
///
/// let vm = DepartmentDetailView::new(
///     Department::new(1, "Sales"),
///     Some("department".to_string()),
///     "traningbackendApp",
///     &bus,
///     &scope,
/// );
///
/// bus.publish("traningbackendApp:departmentUpdate", Department::new(1, "Sales-Renamed"));
/// assert_eq!(vm.department().name, "Sales-Renamed");
///
/// scope.destroy();
/// bus.publish("traningbackendApp:departmentUpdate", Department::new(1, "Ghost"));
/// assert_eq!(vm.department().name, "Sales-Renamed");
/// ```
pub struct EntityDetailView<T> {
    /// The current entity, swapped atomically on update
    entity: Arc<ArcSwap<T>>,
    /// Label of the navigation state the view was entered from
    previous_state: Option<String>,
    event: EventName,
    subscription_id: SubscriptionId,
    bus: EventBus,
}

impl<T: Entity> EntityDetailView<T> {
    /// Create a view-model for an already resolved entity.
    ///
    /// # Arguments
    ///
    /// * `entity` - The entity to display
    /// * `previous_state` - Label of the state to navigate back to, if any
    /// * `namespace` - Application namespace prefixing the update event name
    /// * `bus` - The application's notification bus
    /// * `scope` - The owning view's scope; its destruction ends the subscription
    pub fn new(
        entity: T,
        previous_state: Option<String>,
        namespace: &str,
        bus: &EventBus,
        scope: &ViewScope,
    ) -> Self {
        let entity = Arc::new(ArcSwap::new(Arc::new(entity)));
        let event = EventName::update(namespace, T::ENTITY_TYPE);

        let slot = Arc::clone(&entity);
        let subscription = bus.subscribe_to(&event, move |updated: Arc<T>| {
            slot.store(updated);
        });
        let subscription_id = subscription.id();
        scope.own(subscription);

        tracing::debug!(
            event = %event,
            scope = scope.name(),
            previous_state = previous_state.as_deref(),
            "detail view attached"
        );

        Self {
            entity,
            previous_state,
            event,
            subscription_id,
            bus: bus.clone(),
        }
    }

    /// Get the current entity.
    pub fn entity(&self) -> Arc<T> {
        self.entity.load_full()
    }

    /// Get the previous-state label supplied at construction.
    pub fn previous_state(&self) -> Option<&str> {
        self.previous_state.as_deref()
    }

    /// The update event this view listens to.
    pub fn event_name(&self) -> &EventName {
        &self.event
    }

    /// Whether the view still receives updates.
    pub fn is_subscribed(&self) -> bool {
        self.bus.is_subscribed(self.subscription_id)
    }
}

/// Detail view-model for a [`Department`].
pub type DepartmentDetailView = EntityDetailView<Department>;

/// Detail view-model for an [`Employee`].
pub type EmployeeDetailView = EntityDetailView<Employee>;

impl EntityDetailView<Department> {
    /// Get the current department.
    pub fn department(&self) -> Arc<Department> {
        self.entity()
    }
}

impl EntityDetailView<Employee> {
    /// Get the current employee.
    pub fn employee(&self) -> Arc<Employee> {
        self.entity()
    }
}
