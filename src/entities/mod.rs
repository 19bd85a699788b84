//! Backend entity records shown by the detail views.

mod department;
mod employee;

pub use department::Department;
pub use employee::Employee;

/// A backend-sourced record that can be displayed by an
/// [`EntityDetailView`](crate::core::EntityDetailView).
pub trait Entity: Send + Sync + 'static {
    /// Entity type name used in update event names (`department`, `employee`).
    const ENTITY_TYPE: &'static str;

    /// REST collection path the entity is served from, relative to the API base.
    const RESOURCE_PATH: &'static str;
}
