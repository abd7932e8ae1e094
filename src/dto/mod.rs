//! DTOs exposed by the API endpoints.

pub mod company;
pub mod employee;
