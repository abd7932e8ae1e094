use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod company;
pub mod employee;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter, ordering and paging parameters for the employee list query.
#[derive(Debug, Clone)]
pub struct EmployeeListQuery {
    pub company_id: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl EmployeeListQuery {
    pub fn new(company_id: i32) -> Self {
        Self {
            company_id,
            min_age: None,
            max_age: None,
            pagination: None,
        }
    }

    pub fn min_age(mut self, min_age: i32) -> Self {
        self.min_age = Some(min_age);
        self
    }

    pub fn max_age(mut self, max_age: i32) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CompanyReader {
    fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>>;
    fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
    fn list_companies_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Company>>;
}

pub trait CompanyWriter {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
    fn update_company(&self, company_id: i32, updates: &UpdateCompany)
    -> RepositoryResult<Company>;
    fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
}

pub trait EmployeeReader {
    fn get_employee_by_id(
        &self,
        company_id: i32,
        employee_id: i32,
    ) -> RepositoryResult<Option<Employee>>;
    /// Returns the total count of employees matching the filters and the
    /// requested page, ordered by (name, id).
    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<(usize, Vec<Employee>)>;
}

pub trait EmployeeWriter {
    fn create_employee(
        &self,
        company_id: i32,
        new_employee: &NewEmployee,
    ) -> RepositoryResult<Employee>;
    fn update_employee(
        &self,
        company_id: i32,
        employee_id: i32,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee>;
    fn delete_employee(&self, company_id: i32, employee_id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of the repository traits, constructed
/// once at the composition root and shared by handle.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(get_connection(&self.pool)?)
    }
}
