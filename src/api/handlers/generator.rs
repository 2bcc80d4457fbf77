// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};

use crate::api::types::{GenerateRequest, GenerateResponse};
use crate::core::config::Config;
use crate::db::Database;
use crate::generators;
use crate::models::GenerationMethod;

/// Generate a password
///
/// Generates a password with the requested policy and optionally persists a
/// username/password record. A failed save never withholds the password.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid generation options", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    db: web::Data<Database>,
    config: web::Data<Config>,
    generation_req: web::Json<GenerateRequest>,
) -> HttpResponse {
    let length = generation_req.length.unwrap_or(config.default_password_length);

    // Length bounds are a presentation concern, enforced here before the
    // policy engine runs
    if length < config.min_password_length {
        return bad_request(&format!(
            "Password length must be at least {} characters",
            config.min_password_length
        ));
    }
    if length > config.max_password_length {
        return bad_request(&format!(
            "Password length must be at most {} characters",
            config.max_password_length
        ));
    }

    let result = match generation_req.method {
        GenerationMethod::Simple => Ok(generators::generate_simple(length)),
        GenerationMethod::Selective => generators::generate_selective(
            length,
            generation_req.include_uppercase.unwrap_or(false),
            generation_req.include_lowercase.unwrap_or(false),
            generation_req.include_digits.unwrap_or(false),
            generation_req.include_special.unwrap_or(false),
        ),
        GenerationMethod::Required => {
            let required = generation_req.required.clone().unwrap_or_default();
            generators::generate_required(length, &required)
        }
    };

    let password = match result {
        Ok(password) => password,
        // Configuration errors go back to the user verbatim
        Err(e) => return bad_request(&e.to_string()),
    };

    // Persist when a username was supplied; the password is returned either way
    let username = generation_req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let (record_id, saved) = match username {
        Some(username) => match db.save_record(username, &password).await {
            Ok(id) => {
                log::info!("Saved record {} for user '{}'", id, username);
                (Some(id.to_string()), Some(true))
            }
            Err(e) => {
                log::error!("Failed to save record for user '{}': {}", username, e);
                (None, Some(false))
            }
        },
        None => (None, None),
    };

    HttpResponse::Ok().json(GenerateResponse {
        success: true,
        password: Some(password),
        record_id,
        saved,
        error: None,
    })
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(GenerateResponse {
        success: false,
        password: None,
        record_id: None,
        saved: None,
        error: Some(message.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::db::{sqlite::SqliteBackend, DatabaseType};

    async fn call(
        db: Database,
        config: Config,
        body: serde_json::Value,
    ) -> (u16, GenerateResponse) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(config))
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let payload: GenerateResponse = test::read_body_json(resp).await;
        (status, payload)
    }

    async fn working_db() -> Database {
        crate::db::init_db("sqlite::memory:").await.unwrap()
    }

    // A backend that was never initialized fails every write, standing in
    // for a storage outage.
    fn broken_db() -> Database {
        Database {
            backend: DatabaseType::Sqlite(SqliteBackend::new()),
        }
    }

    #[actix_web::test]
    async fn generates_and_saves_with_username() {
        let body = json!({"method": "simple", "length": 12, "username": "alice"});
        let (status, payload) = call(working_db().await, Config::default(), body).await;

        assert_eq!(status, 200);
        assert!(payload.success);
        assert_eq!(payload.password.unwrap().len(), 12);
        assert_eq!(payload.saved, Some(true));
        assert!(!payload.record_id.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn storage_failure_still_returns_password() {
        let body = json!({"method": "simple", "length": 12, "username": "alice"});
        let (status, payload) = call(broken_db(), Config::default(), body).await;

        assert_eq!(status, 200);
        assert!(payload.success);
        assert_eq!(payload.password.unwrap().len(), 12);
        assert_eq!(payload.saved, Some(false));
        assert!(payload.record_id.is_none());
    }

    #[actix_web::test]
    async fn skips_saving_without_username() {
        let body = json!({"method": "simple", "length": 8});
        let (status, payload) = call(working_db().await, Config::default(), body).await;

        assert_eq!(status, 200);
        assert!(payload.saved.is_none());
        assert!(payload.record_id.is_none());
    }

    #[actix_web::test]
    async fn length_defaults_and_bounds_come_from_config() {
        let config = Config {
            default_password_length: 20,
            min_password_length: 6,
            ..Default::default()
        };

        let body = json!({"method": "simple"});
        let (_, payload) = call(working_db().await, config.clone(), body).await;
        assert_eq!(payload.password.unwrap().len(), 20);

        let body = json!({"method": "simple", "length": 5});
        let (status, payload) = call(working_db().await, config, body).await;
        assert_eq!(status, 400);
        assert_eq!(
            payload.error.unwrap(),
            "Password length must be at least 6 characters"
        );
    }

    #[actix_web::test]
    async fn selective_with_no_classes_is_rejected_verbatim() {
        let body = json!({"method": "selective", "length": 8});
        let (status, payload) = call(working_db().await, Config::default(), body).await;

        assert_eq!(status, 400);
        assert!(!payload.success);
        assert_eq!(
            payload.error.unwrap(),
            "At least one character type must be selected"
        );
    }
}
