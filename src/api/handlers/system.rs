// src/api/handlers/system.rs
use actix_web::{web, HttpResponse};

use crate::api::types::StatusResponse;
use crate::db::Database;

/// Get server status
///
/// Reports the active storage backend and how many records it holds.
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Server status", body = StatusResponse)
    )
)]
pub async fn get_status(db: web::Data<Database>) -> HttpResponse {
    let record_count = match db.count_records().await {
        Ok(count) => Some(count),
        Err(e) => {
            log::warn!("Failed to count records: {}", e);
            None
        }
    };

    HttpResponse::Ok().json(StatusResponse {
        success: true,
        backend: db.get_backend_type().to_string(),
        record_count,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
