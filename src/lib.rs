use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::company::{
    company_options, create_company, create_company_collection, delete_company, get_company,
    get_company_collection, list_companies, update_company,
};
use crate::routes::employee::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod shaping;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool =
        establish_connection_pool(&server_config.database_url, &server_config.pool_settings())
            .map_err(|e| {
                std::io::Error::other(format!("Failed to establish database connection: {e}"))
            })?;

    // All storage access components are constructed eagerly here and
    // handed to the handlers by handle.
    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(company_options)
                    .service(list_companies)
                    .service(create_company)
                    .service(get_company_collection)
                    .service(create_company_collection)
                    .service(get_company)
                    .service(update_company)
                    .service(delete_company)
                    .service(list_employees)
                    .service(create_employee)
                    .service(get_employee)
                    .service(update_employee)
                    .service(delete_employee),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
