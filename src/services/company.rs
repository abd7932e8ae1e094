use validator::Validate;

use crate::domain::company::{NewCompany, UpdateCompany};
use crate::dto::company::CompanyDto;
use crate::forms::company::{NewCompanyForm, UpdateCompanyForm};
use crate::repository::{CompanyReader, CompanyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists every company as its flat DTO.
pub fn list_companies<R>(repo: &R) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyReader + ?Sized,
{
    let companies = repo.list_companies().map_err(ServiceError::from)?;
    Ok(companies.into_iter().map(CompanyDto::from).collect())
}

/// Fetches a single company by its identifier.
pub fn get_company<R>(repo: &R, company_id: i32) -> ServiceResult<CompanyDto>
where
    R: CompanyReader + ?Sized,
{
    match repo.get_company_by_id(company_id).map_err(ServiceError::from)? {
        Some(company) => Ok(company.into()),
        None => {
            log::info!("Company with id {company_id} doesn't exist in the database");
            Err(ServiceError::NotFound)
        }
    }
}

/// Fetches the companies for an explicit id collection. Every requested
/// id must resolve, otherwise the whole lookup is reported as not found.
pub fn get_company_collection<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyReader + ?Sized,
{
    let companies = repo.list_companies_by_ids(ids).map_err(ServiceError::from)?;

    if companies.len() != ids.len() {
        log::info!("Some ids in the requested collection are not valid");
        return Err(ServiceError::NotFound);
    }

    Ok(companies.into_iter().map(CompanyDto::from).collect())
}

/// Validates and persists a new company.
pub fn create_company<R>(repo: &R, form: &NewCompanyForm) -> ServiceResult<CompanyDto>
where
    R: CompanyWriter + ?Sized,
{
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let new_company: NewCompany = form.into();
    let created = repo
        .create_company(&new_company)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Validates and persists a batch of companies.
pub fn create_company_collection<R>(
    repo: &R,
    forms: &[NewCompanyForm],
) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyWriter + ?Sized,
{
    for form in forms {
        form.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
    }

    let new_companies: Vec<NewCompany> = forms.iter().map(Into::into).collect();
    let created = repo
        .create_companies(&new_companies)
        .map_err(ServiceError::from)?;

    Ok(created.into_iter().map(CompanyDto::from).collect())
}

/// Validates and applies a full update to an existing company.
pub fn update_company<R>(
    repo: &R,
    company_id: i32,
    form: &UpdateCompanyForm,
) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let updates: UpdateCompany = form.into();
    repo.update_company(company_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(())
}

/// Deletes a company together with its employees.
pub fn delete_company<R>(repo: &R, company_id: i32) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    repo.delete_company(company_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::Company;
    use crate::repository::mock::MockRepository;

    fn acme(id: i32) -> Company {
        Company {
            id,
            name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn get_company_maps_missing_rows_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_company_by_id().returning(|_| Ok(None));

        let err = get_company(&repo, 42).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn collection_with_a_missing_id_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_list_companies_by_ids()
            .returning(|_| Ok(vec![acme(1)]));

        let err = get_company_collection(&repo, &[1, 2]).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn create_company_rejects_invalid_forms_before_storage() {
        let repo = MockRepository::new();
        let form = NewCompanyForm {
            name: String::new(),
            address: "addr".to_string(),
            country: "USA".to_string(),
        };

        let err = create_company(&repo, &form).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
