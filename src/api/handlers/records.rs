// src/api/handlers/records.rs

use actix_web::{web, HttpResponse};

use crate::api::types::{SaveRecordRequest, SaveRecordResponse};
use crate::db::Database;

/// Save a username/password record
///
/// Persists an explicit username/password pair and returns the new record id.
#[utoipa::path(
    post,
    path = "/records",
    tag = "Records",
    request_body = SaveRecordRequest,
    responses(
        (status = 200, description = "Record saved", body = SaveRecordResponse),
        (status = 400, description = "Missing username", body = SaveRecordResponse),
        (status = 500, description = "Storage failure", body = SaveRecordResponse)
    )
)]
pub async fn save_record(
    db: web::Data<Database>,
    save_req: web::Json<SaveRecordRequest>,
) -> HttpResponse {
    let username = save_req.username.trim();
    if username.is_empty() {
        return HttpResponse::BadRequest().json(SaveRecordResponse {
            success: false,
            record_id: None,
            error: Some("Please enter a username".to_string()),
        });
    }

    match db.save_record(username, &save_req.password).await {
        Ok(id) => {
            log::info!("Saved record {} for user '{}'", id, username);
            HttpResponse::Ok().json(SaveRecordResponse {
                success: true,
                record_id: Some(id.to_string()),
                error: None,
            })
        }
        Err(e) => {
            log::error!("Failed to save record for user '{}': {}", username, e);
            HttpResponse::InternalServerError().json(SaveRecordResponse {
                success: false,
                record_id: None,
                error: Some("Failed to save user record".to_string()),
            })
        }
    }
}
