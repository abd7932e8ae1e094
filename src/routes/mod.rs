//! Actix handlers translating service results into HTTP responses.

use actix_web::HttpResponse;
use log::error;

use crate::services::ServiceError;

pub mod company;
pub mod employee;

/// Maps a service failure onto its status code. Validation problems are
/// client errors with a message body, storage failures are logged and
/// surfaced as bare 500s so the caller decides any retry policy.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Repository(err) => {
            error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
