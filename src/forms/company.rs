use serde::Deserialize;
use validator::Validate;

use crate::domain::company::{NewCompany, UpdateCompany};

#[derive(Debug, Deserialize, Validate)]
/// Body payload for creating a company.
pub struct NewCompanyForm {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub address: String,
    pub country: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Body payload for replacing a company.
pub struct UpdateCompanyForm {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub address: String,
    pub country: String,
}

impl From<&NewCompanyForm> for NewCompany {
    fn from(form: &NewCompanyForm) -> Self {
        NewCompany::new(
            form.name.clone(),
            form.address.clone(),
            form.country.clone(),
        )
    }
}

impl From<&UpdateCompanyForm> for UpdateCompany {
    fn from(form: &UpdateCompanyForm) -> Self {
        UpdateCompany::new(
            form.name.clone(),
            form.address.clone(),
            form.country.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overly_long_name_fails_validation() {
        let form = NewCompanyForm {
            name: "x".repeat(61),
            address: "addr".to_string(),
            country: "USA".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn conversion_trims_whitespace() {
        let form = NewCompanyForm {
            name: " Acme ".to_string(),
            address: " 1 Main St ".to_string(),
            country: " USA ".to_string(),
        };
        let new: NewCompany = (&form).into();
        assert_eq!(new.name, "Acme");
        assert_eq!(new.address, "1 Main St");
        assert_eq!(new.country, "USA");
    }
}
