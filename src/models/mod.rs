//! Diesel models mapped to and from the domain types.

pub mod company;
pub mod config;
pub mod employee;
