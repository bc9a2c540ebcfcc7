//! Handlers for owner-scoped link management endpoints.
//!
//! Every handler here runs behind the bearer-auth middleware, which
//! resolves the current [`User`] and injects it as a request extension
//! before any storage access happens.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, LinkListResponse, LinkResponse, UpdateLinkRequest,
};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the current user.
///
/// # Endpoint
///
/// `POST /api/link`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path", "category": "news" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` or `category` is missing or invalid.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(&user, &payload.url, &payload.category)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Replaces the destination URL and category of an owned link.
///
/// # Endpoint
///
/// `PUT /api/link/{id}`
///
/// The short code and short URL are immutable; only `url`, `category`,
/// and `updatedAt` change.
///
/// # Errors
///
/// Returns 404 Not Found when the current user owns no link with this id
/// — a link belonging to someone else is indistinguishable from a missing
/// one. Returns 400 Bad Request on validation failure.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .update(&user, id, &payload.url, &payload.category)
        .await?;

    Ok(Json(link.into()))
}

/// Deletes an owned link.
///
/// # Endpoint
///
/// `DELETE /api/link/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the current user owns no link with this id.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a single owned link by id.
///
/// # Endpoint
///
/// `GET /api/link/{id}`
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_by_id(&user, id).await?;

    Ok(Json(link.into()))
}

/// Lists all links owned by the current user.
///
/// # Endpoint
///
/// `GET /api/links/all`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.get_all(&user).await?;

    Ok(Json(LinkListResponse::new(links)))
}

/// Lists the current user's links in one category.
///
/// # Endpoint
///
/// `GET /api/links/category/{category}`
pub async fn links_by_category_handler(
    Path(category): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.get_by_category(&user, &category).await?;

    Ok(Json(LinkListResponse::new(links)))
}
