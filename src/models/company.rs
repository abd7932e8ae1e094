use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, NewCompany as DomainNewCompany,
    UpdateCompany as DomainUpdateCompany,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub country: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub country: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::companies)]
/// Data used when updating a [`Company`] record.
pub struct UpdateCompany<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub country: &'a str,
}

impl From<Company> for DomainCompany {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            address: company.address,
            country: company.country,
        }
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(company: &'a DomainNewCompany) -> Self {
        Self {
            name: company.name.as_str(),
            address: company.address.as_str(),
            country: company.country.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCompany> for UpdateCompany<'a> {
    fn from(company: &'a DomainUpdateCompany) -> Self {
        Self {
            name: company.name.as_str(),
            address: company.address.as_str(),
            country: company.country.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_newcompany() {
        let domain = DomainNewCompany::new(
            "Acme".to_string(),
            "1 Main St".to_string(),
            "USA".to_string(),
        );
        let new: NewCompany = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.address, domain.address);
        assert_eq!(new.country, domain.country);
    }

    #[test]
    fn company_into_domain() {
        let db_company = Company {
            id: 7,
            name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            country: "USA".to_string(),
        };
        let domain: DomainCompany = db_company.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.name, "Acme");
        assert_eq!(domain.address, "1 Main St");
        assert_eq!(domain.country, "USA");
    }
}
