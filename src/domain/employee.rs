use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Employee {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub age: i32,
    pub position: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(name: String, age: i32, position: String) -> Self {
        Self {
            name: name.trim().to_string(),
            age,
            position: position.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl UpdateEmployee {
    #[must_use]
    pub fn new(name: String, age: i32, position: String) -> Self {
        Self {
            name: name.trim().to_string(),
            age,
            position: position.trim().to_string(),
        }
    }
}
