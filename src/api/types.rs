// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{GenerationMethod, RequiredChars};

// Password generation request/response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired password length (minimum 4, maximum 128)
    pub length: Option<usize>,
    /// Which generation policy to apply
    pub method: GenerationMethod,
    /// Include uppercase letters (selective policy)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (selective policy)
    pub include_lowercase: Option<bool>,
    /// Include digits (selective policy)
    pub include_digits: Option<bool>,
    /// Include special characters (selective policy)
    pub include_special: Option<bool>,
    /// Literal characters that must appear (required policy)
    pub required: Option<RequiredChars>,
    /// Username to persist alongside the generated password (skips saving when absent or empty)
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated password (only present on success)
    pub password: Option<String>,
    /// Identifier of the persisted record, when a save was requested and succeeded
    pub record_id: Option<String>,
    /// Save outcome: Some(true)/Some(false) when a save was attempted, None otherwise
    pub saved: Option<bool>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Record persistence request/response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveRecordRequest {
    /// Username to store
    pub username: String,
    /// Password to store
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveRecordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Identifier of the persisted record (only present on success)
    pub record_id: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Which storage backend is active
    pub backend: String,
    /// Number of stored user records
    pub record_count: Option<usize>,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_accepts_minimal_selective_body() {
        let body = r#"{"method": "selective", "length": 8, "include_uppercase": true}"#;
        let req: GenerateRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.method, GenerationMethod::Selective);
        assert_eq!(req.include_uppercase, Some(true));
        assert!(req.include_lowercase.is_none());
        assert!(req.username.is_none());
    }

    #[test]
    fn required_chars_default_per_class() {
        let body = r#"{"method": "required", "required": {"uppercase": "AB"}}"#;
        let req: GenerateRequest = serde_json::from_str(body).unwrap();

        let required = req.required.unwrap();
        assert_eq!(required.uppercase, "AB");
        assert!(required.lowercase.is_empty());
        assert_eq!(required.total(), 2);
    }
}
