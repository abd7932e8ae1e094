//! Domain types decoupled from the persistence models.

pub mod company;
pub mod employee;
