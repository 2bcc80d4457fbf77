// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::db::Database;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // Record endpoints
        crate::api::handlers::records::save_record,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::SaveRecordRequest,
            crate::api::types::SaveRecordResponse,
            crate::api::types::StatusResponse,

            crate::models::GenerationMethod,
            crate::models::RequiredChars
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Records", description = "Username/password record persistence"),
        (name = "System", description = "System status and utilities")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Policy-based password generator with optional record persistence",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(db: Database, config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting Passforge API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let db_data = web::Data::new(db);
    let config_data = web::Data::new(config.clone());

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure your regular API routes
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
