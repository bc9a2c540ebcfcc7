//! DTOs for registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 180, message = "Username must be 1-180 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub new_user_id: i64,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response carrying the raw bearer token for a fresh session.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
