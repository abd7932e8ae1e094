use serde::Serialize;

use crate::domain::company::Company;

/// Flat company representation returned by the API. Address and country
/// are folded into a single display field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub full_address: String,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            full_address: format!("{} {}", company.address, company.country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_address_joins_address_and_country() {
        let dto: CompanyDto = Company {
            id: 1,
            name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            country: "USA".to_string(),
        }
        .into();
        assert_eq!(dto.full_address, "1 Main St USA");
    }
}
