//! Namespaced event names.

use std::fmt;

/// Name of an event published on the [`EventBus`](super::EventBus).
///
/// Update events follow the `<namespace>:<entityType>Update` form, e.g.
/// `traningbackendApp:departmentUpdate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName(String);

impl EventName {
    /// Create an event name from its full string form.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build the update event name for an entity type within a namespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entity_detail::bus::EventName;
    ///
    /// let name = EventName::update("traningbackendApp", "employee");
    /// assert_eq!(name.as_str(), "traningbackendApp:employeeUpdate");
    /// ```
    pub fn update(namespace: &str, entity_type: &str) -> Self {
        Self(format!("{namespace}:{entity_type}Update"))
    }

    /// Get the full string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
