use super::{Department, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An employee record, optionally linked to its department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    /// Backend identifier, absent until the record is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full name
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<i32>,
    /// Date of birth
    #[serde(default)]
    pub birthday: Option<DateTime<Utc>>,
    /// Owning department
    #[serde(default)]
    pub department: Option<Department>,
}

impl Employee {
    /// Create an employee with an id and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach the employee to a department.
    pub fn in_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }
}

impl Entity for Employee {
    const ENTITY_TYPE: &'static str = "employee";
    const RESOURCE_PATH: &'static str = "api/employees";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_department() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "name": "Ada",
            "age": 36,
            "birthday": "1990-01-02T00:00:00Z",
            "department": { "id": 1, "name": "Sales", "area": null }
        }))
        .unwrap();

        assert_eq!(employee.age, Some(36));
        assert_eq!(employee.department, Some(Department::new(1, "Sales")));
        assert!(employee.birthday.is_some());
    }

    #[test]
    fn test_missing_optional_fields() {
        let employee: Employee = serde_json::from_value(json!({ "id": 3, "name": "Bo" })).unwrap();
        assert_eq!(employee, Employee::new(3, "Bo"));
    }
}
