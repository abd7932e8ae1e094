use diesel::prelude::*;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, EmployeeListQuery, EmployeeReader, EmployeeWriter};

impl EmployeeReader for DieselRepository {
    fn get_employee_by_id(
        &self,
        company_id: i32,
        employee_id: i32,
    ) -> RepositoryResult<Option<Employee>> {
        use crate::models::employee::Employee as DbEmployee;
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let employee = employees::table
            .filter(employees::id.eq(employee_id))
            .filter(employees::company_id.eq(company_id))
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        Ok(employee.map(Into::into))
    }

    // Count and slice run back to back on the same pooled connection.
    // Consistency between them is whatever SQLite's default isolation
    // gives us; there is no application-level coordination.
    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<(usize, Vec<Employee>)> {
        use crate::models::employee::Employee as DbEmployee;
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let mut count_query = employees::table
            .filter(employees::company_id.eq(query.company_id))
            .into_boxed();
        let mut items_query = employees::table
            .filter(employees::company_id.eq(query.company_id))
            .into_boxed();

        if let Some(min_age) = query.min_age {
            count_query = count_query.filter(employees::age.ge(min_age));
            items_query = items_query.filter(employees::age.ge(min_age));
        }
        if let Some(max_age) = query.max_age {
            count_query = count_query.filter(employees::age.le(max_age));
            items_query = items_query.filter(employees::age.le(max_age));
        }

        let total: i64 = count_query.count().get_result(&mut conn)?;

        // Secondary key keeps the order total when names collide.
        items_query = items_query.order((employees::name.asc(), employees::id.asc()));

        if let Some(pagination) = &query.pagination {
            // Saturate instead of wrapping so absurd page numbers yield
            // an empty slice rather than a negative OFFSET.
            let page = i64::try_from(pagination.page.max(1)).unwrap_or(i64::MAX);
            let per_page = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            let offset = page.saturating_sub(1).saturating_mul(per_page);
            items_query = items_query.limit(per_page).offset(offset);
        }

        let items = items_query
            .load::<DbEmployee>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Employee>>();

        Ok((total as usize, items))
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(
        &self,
        company_id: i32,
        new_employee: &NewEmployee,
    ) -> RepositoryResult<Employee> {
        use crate::models::employee::{Employee as DbEmployee, NewEmployee as DbNewEmployee};
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let insertable = DbNewEmployee::from_domain(company_id, new_employee);
        let created = diesel::insert_into(employees::table)
            .values(&insertable)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(created.into())
    }

    fn update_employee(
        &self,
        company_id: i32,
        employee_id: i32,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee> {
        use crate::models::employee::{Employee as DbEmployee, UpdateEmployee as DbUpdateEmployee};
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateEmployee = updates.into();

        let updated = diesel::update(
            employees::table
                .filter(employees::id.eq(employee_id))
                .filter(employees::company_id.eq(company_id)),
        )
        .set(&db_updates)
        .get_result::<DbEmployee>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_employee(&self, company_id: i32, employee_id: i32) -> RepositoryResult<()> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            employees::table
                .filter(employees::id.eq(employee_id))
                .filter(employees::company_id.eq(company_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
