//! Handler for short URL resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code and redirects to the original URL.
///
/// # Endpoint
///
/// `GET /{code}` (public — no authentication)
///
/// # Request Flow
///
/// 1. Global lookup by code (not owner-scoped)
/// 2. Visit accounting: counter + 1, `updatedAt` refreshed, atomically at
///    the storage layer
/// 3. 307 Temporary Redirect to the stored URL
///
/// Lookup and visit are two separate storage calls; each is internally
/// consistent but they are not atomic with each other.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.get_by_code(&code).await?;
    let link = state.link_service.visit(&link).await?;

    debug!(code, counter = link.counter, "Redirecting visit");

    Ok(Redirect::temporary(&link.url))
}
