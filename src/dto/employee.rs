use serde::Serialize;
use serde_json::Value;

use crate::domain::employee::Employee;
use crate::shaping::{FieldSpec, Shapeable};

/// Flat employee representation consumed by the field shaper.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmployeeDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            position: employee.position,
        }
    }
}

const EMPLOYEE_SCHEMA: &[FieldSpec<EmployeeDto>] = &[
    FieldSpec {
        name: "id",
        get: |e| Value::from(e.id),
    },
    FieldSpec {
        name: "name",
        get: |e| Value::from(e.name.as_str()),
    },
    FieldSpec {
        name: "age",
        get: |e| Value::from(e.age),
    },
    FieldSpec {
        name: "position",
        get: |e| Value::from(e.position.as_str()),
    },
];

impl Shapeable for EmployeeDto {
    fn schema() -> &'static [FieldSpec<Self>] {
        EMPLOYEE_SCHEMA
    }
}
