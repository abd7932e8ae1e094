use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, route, web};

use crate::forms::company::{NewCompanyForm, UpdateCompanyForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::company as company_service;

#[get("/companies")]
pub async fn list_companies(repo: web::Data<DieselRepository>) -> impl Responder {
    match company_service::list_companies(repo.get_ref()) {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(err) => error_response(err),
    }
}

#[get("/companies/{company_id}")]
pub async fn get_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::get_company(repo.get_ref(), company_id.into_inner()) {
        Ok(company) => HttpResponse::Ok().json(company),
        Err(err) => error_response(err),
    }
}

#[post("/companies")]
pub async fn create_company(
    web::Json(form): web::Json<NewCompanyForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::create_company(repo.get_ref(), &form) {
        Ok(company) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/companies/{}", company.id)))
            .json(company),
        Err(err) => error_response(err),
    }
}

#[get("/companies/collection/{ids}")]
pub async fn get_company_collection(
    ids: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parsed: Result<Vec<i32>, _> = ids
        .split(',')
        .map(|id| id.trim().parse::<i32>())
        .collect();

    let ids = match parsed {
        Ok(ids) if !ids.is_empty() => ids,
        _ => return HttpResponse::BadRequest().body("Parameter ids is not a valid id list"),
    };

    match company_service::get_company_collection(repo.get_ref(), &ids) {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(err) => error_response(err),
    }
}

#[post("/companies/collection")]
pub async fn create_company_collection(
    web::Json(forms): web::Json<Vec<NewCompanyForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::create_company_collection(repo.get_ref(), &forms) {
        Ok(companies) => {
            let ids = companies
                .iter()
                .map(|c| c.id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("/api/companies/collection/{ids}")))
                .json(companies)
        }
        Err(err) => error_response(err),
    }
}

#[put("/companies/{company_id}")]
pub async fn update_company(
    company_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateCompanyForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::update_company(repo.get_ref(), company_id.into_inner(), &form) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/companies/{company_id}")]
pub async fn delete_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::delete_company(repo.get_ref(), company_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[route("/companies", method = "OPTIONS")]
pub async fn company_options() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, "GET, OPTIONS, POST"))
        .finish()
}
