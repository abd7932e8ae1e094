//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanyReader, CompanyWriter, EmployeeListQuery, EmployeeReader, EmployeeWriter,
};

mock! {
    pub Repository {}

    impl CompanyReader for Repository {
        fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>>;
        fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
        fn list_companies_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Company>>;
    }

    impl CompanyWriter for Repository {
        fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
        fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
        fn update_company(
            &self,
            company_id: i32,
            updates: &UpdateCompany,
        ) -> RepositoryResult<Company>;
        fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
    }

    impl EmployeeReader for Repository {
        fn get_employee_by_id(
            &self,
            company_id: i32,
            employee_id: i32,
        ) -> RepositoryResult<Option<Employee>>;
        fn list_employees(
            &self,
            query: EmployeeListQuery,
        ) -> RepositoryResult<(usize, Vec<Employee>)>;
    }

    impl EmployeeWriter for Repository {
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
}
