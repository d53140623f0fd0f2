//! Test fixtures and data generators
//!
//! Usernames and emails carry a UUID so reruns against the same database
//! never collide.

use serde::{Deserialize, Serialize};

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user_{suffix}"),
            email: format!("user_{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub premium: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Reaction request
#[derive(Debug, Serialize)]
pub struct ReactRequest {
    pub target_id: u64,
    #[serde(rename = "type")]
    pub reaction_type: i32,
}

impl ReactRequest {
    pub fn like(target_id: u64) -> Self {
        Self {
            target_id,
            reaction_type: 2,
        }
    }
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub field: Option<String>,
}
