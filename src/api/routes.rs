// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Form-based front end
    cfg.route("/", web::get().to(handlers::index::index));

    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password)),
    );

    // Record persistence
    cfg.service(web::scope("/records").route("", web::post().to(handlers::records::save_record)));

    // System status
    cfg.service(web::scope("/system").route("/status", web::get().to(handlers::system::get_status)));
}
