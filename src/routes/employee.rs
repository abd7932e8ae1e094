use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;

use crate::forms::employee::{EmployeeListParams, NewEmployeeForm, UpdateEmployeeForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::employee as employee_service;

/// Name of the response header carrying the page metadata, keeping the
/// response body free of paging bookkeeping.
pub const PAGINATION_HEADER: &str = "X-Pagination";

#[get("/companies/{company_id}/employees")]
pub async fn list_employees(
    company_id: web::Path<i32>,
    params: web::Query<EmployeeListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = match employee_service::list_employees(
        repo.get_ref(),
        company_id.into_inner(),
        &params,
    ) {
        Ok(page) => page,
        Err(err) => return error_response(err),
    };

    match serde_json::to_string(&page.meta) {
        Ok(meta) => HttpResponse::Ok()
            .insert_header((PAGINATION_HEADER, meta))
            .json(page.items),
        Err(e) => {
            error!("Failed to serialize pagination metadata: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/companies/{company_id}/employees/{employee_id}")]
pub async fn get_employee(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (company_id, employee_id) = path.into_inner();

    match employee_service::get_employee(repo.get_ref(), company_id, employee_id) {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => error_response(err),
    }
}

#[post("/companies/{company_id}/employees")]
pub async fn create_employee(
    company_id: web::Path<i32>,
    web::Json(form): web::Json<NewEmployeeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let company_id = company_id.into_inner();

    match employee_service::create_employee(repo.get_ref(), company_id, &form) {
        Ok(employee) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/api/companies/{company_id}/employees/{}", employee.id),
            ))
            .json(employee),
        Err(err) => error_response(err),
    }
}

#[put("/companies/{company_id}/employees/{employee_id}")]
pub async fn update_employee(
    path: web::Path<(i32, i32)>,
    web::Json(form): web::Json<UpdateEmployeeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (company_id, employee_id) = path.into_inner();

    match employee_service::update_employee(repo.get_ref(), company_id, employee_id, &form) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/companies/{company_id}/employees/{employee_id}")]
pub async fn delete_employee(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (company_id, employee_id) = path.into_inner();

    match employee_service::delete_employee(repo.get_ref(), company_id, employee_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
