//! Request-boundary types backing the API routes.

pub mod company;
pub mod employee;
