use validator::Validate;

use crate::domain::employee::{NewEmployee, UpdateEmployee};
use crate::dto::employee::EmployeeDto;
use crate::forms::employee::{EmployeeListParams, NewEmployeeForm, UpdateEmployeeForm};
use crate::pagination::{PageMetadata, Paginated};
use crate::repository::{CompanyReader, EmployeeListQuery, EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::shaping::{ShapedEntity, shape};

fn ensure_company_exists<R>(repo: &R, company_id: i32) -> ServiceResult<()>
where
    R: CompanyReader + ?Sized,
{
    if repo
        .get_company_by_id(company_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        log::info!("Company with id {company_id} doesn't exist in the database");
        return Err(ServiceError::NotFound);
    }
    Ok(())
}

/// Returns one shaped page of a company's employees plus its metadata.
///
/// The age range is validated and the owning company resolved before any
/// employee query runs.
pub fn list_employees<R>(
    repo: &R,
    company_id: i32,
    params: &EmployeeListParams,
) -> ServiceResult<Paginated<ShapedEntity>>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    if !params.valid_age_range() {
        return Err(ServiceError::Validation(
            "Max age can't be less than min age.".to_string(),
        ));
    }

    ensure_company_exists(repo, company_id)?;

    let page = params.page();
    let page_size = params.page_size();

    let mut query = EmployeeListQuery::new(company_id).paginate(page, page_size);
    if let Some(min_age) = params.min_age {
        query = query.min_age(min_age);
    }
    if let Some(max_age) = params.max_age {
        query = query.max_age(max_age);
    }

    let (total, employees) = repo.list_employees(query).map_err(ServiceError::from)?;

    let meta = PageMetadata::new(total, page, page_size);
    let dtos = employees.into_iter().map(EmployeeDto::from);
    let items = shape(dtos, params.fields.as_deref()).collect();

    Ok(Paginated::new(items, meta))
}

/// Fetches a single employee scoped to its company.
pub fn get_employee<R>(repo: &R, company_id: i32, employee_id: i32) -> ServiceResult<EmployeeDto>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    ensure_company_exists(repo, company_id)?;

    match repo
        .get_employee_by_id(company_id, employee_id)
        .map_err(ServiceError::from)?
    {
        Some(employee) => Ok(employee.into()),
        None => {
            log::info!("Employee with id {employee_id} doesn't exist in the database");
            Err(ServiceError::NotFound)
        }
    }
}

/// Validates and persists a new employee under the given company.
pub fn create_employee<R>(
    repo: &R,
    company_id: i32,
    form: &NewEmployeeForm,
) -> ServiceResult<EmployeeDto>
where
    R: CompanyReader + EmployeeWriter + ?Sized,
{
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    ensure_company_exists(repo, company_id)?;

    let new_employee: NewEmployee = form.into();
    let created = repo
        .create_employee(company_id, &new_employee)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Validates and applies a full update to an existing employee.
pub fn update_employee<R>(
    repo: &R,
    company_id: i32,
    employee_id: i32,
    form: &UpdateEmployeeForm,
) -> ServiceResult<()>
where
    R: CompanyReader + EmployeeWriter + ?Sized,
{
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    ensure_company_exists(repo, company_id)?;

    let updates: UpdateEmployee = form.into();
    repo.update_employee(company_id, employee_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(())
}

/// Deletes an employee scoped to its company.
pub fn delete_employee<R>(repo: &R, company_id: i32, employee_id: i32) -> ServiceResult<()>
where
    R: CompanyReader + EmployeeWriter + ?Sized,
{
    ensure_company_exists(repo, company_id)?;

    repo.delete_employee(company_id, employee_id)
        .map_err(ServiceError::from)
}
