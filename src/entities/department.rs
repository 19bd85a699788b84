use super::Entity;
use serde::{Deserialize, Serialize};

/// A department record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Department {
    /// Backend identifier, absent until the record is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// Area code of the department
    #[serde(default)]
    pub area: Option<i64>,
}

impl Department {
    /// Create a department with an id and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            area: None,
        }
    }

    /// Set the area.
    pub fn with_area(mut self, area: i64) -> Self {
        self.area = Some(area);
        self
    }
}

impl Entity for Department {
    const ENTITY_TYPE: &'static str = "department";
    const RESOURCE_PATH: &'static str = "api/departments";
}
