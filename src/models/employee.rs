use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub age: i32,
    pub position: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub company_id: i32,
    pub name: &'a str,
    pub age: i32,
    pub position: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
/// Data used when updating an [`Employee`] record.
pub struct UpdateEmployee<'a> {
    pub name: &'a str,
    pub age: i32,
    pub position: &'a str,
}

impl From<Employee> for DomainEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            company_id: employee.company_id,
            name: employee.name,
            age: employee.age,
            position: employee.position,
        }
    }
}

impl<'a> NewEmployee<'a> {
    pub fn from_domain(company_id: i32, employee: &'a DomainNewEmployee) -> Self {
        Self {
            company_id,
            name: employee.name.as_str(),
            age: employee.age,
            position: employee.position.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateEmployee> for UpdateEmployee<'a> {
    fn from(employee: &'a DomainUpdateEmployee) -> Self {
        Self {
            name: employee.name.as_str(),
            age: employee.age,
            position: employee.position.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_newemployee() {
        let domain = DomainNewEmployee::new("Alice".to_string(), 30, "Engineer".to_string());
        let new = NewEmployee::from_domain(3, &domain);
        assert_eq!(new.company_id, 3);
        assert_eq!(new.name, domain.name);
        assert_eq!(new.age, 30);
        assert_eq!(new.position, domain.position);
    }

    #[test]
    fn employee_into_domain() {
        let db_employee = Employee {
            id: 5,
            company_id: 3,
            name: "Alice".to_string(),
            age: 30,
            position: "Engineer".to_string(),
        };
        let domain: DomainEmployee = db_employee.into();
        assert_eq!(domain.id, 5);
        assert_eq!(domain.company_id, 3);
        assert_eq!(domain.age, 30);
    }
}
