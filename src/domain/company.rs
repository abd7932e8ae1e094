use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub country: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub address: String,
    pub country: String,
}

impl NewCompany {
    #[must_use]
    pub fn new(name: String, address: String, country: String) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            country: country.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub address: String,
    pub country: String,
}

impl UpdateCompany {
    #[must_use]
    pub fn new(name: String, address: String, country: String) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            country: country.trim().to_string(),
        }
    }
}
