use serde::Deserialize;
use validator::Validate;

use crate::domain::employee::{NewEmployee, UpdateEmployee};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};

#[derive(Debug, Deserialize, Validate)]
/// Body payload for creating an employee.
pub struct NewEmployeeForm {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(range(min = 18, max = 70))]
    pub age: i32,
    #[validate(length(min = 1, max = 20))]
    pub position: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Body payload for replacing an employee.
pub struct UpdateEmployeeForm {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(range(min = 18, max = 70))]
    pub age: i32,
    #[validate(length(min = 1, max = 20))]
    pub position: String,
}

impl From<&NewEmployeeForm> for NewEmployee {
    fn from(form: &NewEmployeeForm) -> Self {
        NewEmployee::new(form.name.clone(), form.age, form.position.clone())
    }
}

impl From<&UpdateEmployeeForm> for UpdateEmployee {
    fn from(form: &UpdateEmployeeForm) -> Self {
        UpdateEmployee::new(form.name.clone(), form.age, form.position.clone())
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Query parameters accepted by the employee list endpoint.
pub struct EmployeeListParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Comma-separated field names for response shaping.
    pub fields: Option<String>,
}

impl EmployeeListParams {
    /// Requested page number; absent or zero means the first page.
    pub fn page(&self) -> usize {
        match self.page {
            None | Some(0) => 1,
            Some(page) => page,
        }
    }

    /// Requested page size, defaulted and clamped to the configured
    /// maximum. Over-limit requests are narrowed, never rejected.
    pub fn page_size(&self) -> usize {
        match self.page_size {
            None | Some(0) => DEFAULT_ITEMS_PER_PAGE,
            Some(size) => size.min(MAX_ITEMS_PER_PAGE),
        }
    }

    /// The age range is valid when no upper bound is supplied or the
    /// upper bound is at least the lower bound (inclusive).
    pub fn valid_age_range(&self) -> bool {
        match (self.min_age, self.max_age) {
            (Some(min), Some(max)) => max >= min,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(EmployeeListParams::default().page(), 1);
        let params = EmployeeListParams {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn page_size_defaults_and_clamps() {
        assert_eq!(
            EmployeeListParams::default().page_size(),
            DEFAULT_ITEMS_PER_PAGE
        );
        let params = EmployeeListParams {
            page_size: Some(MAX_ITEMS_PER_PAGE + 100),
            ..Default::default()
        };
        assert_eq!(params.page_size(), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn age_range_is_valid_without_an_upper_bound() {
        let params = EmployeeListParams {
            min_age: Some(30),
            ..Default::default()
        };
        assert!(params.valid_age_range());
    }

    #[test]
    fn equal_bounds_form_a_valid_inclusive_range() {
        let params = EmployeeListParams {
            min_age: Some(40),
            max_age: Some(40),
            ..Default::default()
        };
        assert!(params.valid_age_range());
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        let params = EmployeeListParams {
            min_age: Some(50),
            max_age: Some(40),
            ..Default::default()
        };
        assert!(!params.valid_age_range());
    }

    #[test]
    fn employee_age_outside_18_to_70_fails_validation() {
        let form = NewEmployeeForm {
            name: "Alice".to_string(),
            age: 17,
            position: "Engineer".to_string(),
        };
        assert!(form.validate().is_err());

        let form = NewEmployeeForm {
            name: "Alice".to_string(),
            age: 70,
            position: "Engineer".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
