//! Framework-free application services.
//!
//! Functions here are generic over the repository traits so they can be
//! exercised against mocks without a database or an HTTP stack.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod company;
pub mod employee;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
