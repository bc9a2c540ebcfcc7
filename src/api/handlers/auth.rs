//! Handlers for registration and login endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 400 Bad Request on empty username/password and 409 Conflict
/// when the username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            new_user_id: user.id,
        }),
    ))
}

/// Verifies credentials and opens a session.
///
/// # Endpoint
///
/// `POST /login`
///
/// The returned token is presented as `Authorization: Bearer <token>` on
/// all `/api` routes. It is shown exactly once — only its hash is stored.
///
/// # Errors
///
/// Returns 401 Unauthorized on bad credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let token = state
        .user_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
