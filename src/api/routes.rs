//! API route configuration.
//!
//! All routes here require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, links_by_category_handler,
    list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Owner-scoped link routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /link`                       - Create a short link
/// - `GET    /link/{id}`                  - Fetch one of your links
/// - `PUT    /link/{id}`                  - Update destination and category
/// - `DELETE /link/{id}`                  - Delete a link
/// - `GET    /links/all`                  - List all your links
/// - `GET    /links/category/{category}`  - List your links in a category
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/link", post(create_link_handler))
        .route(
            "/link/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/links/all", get(list_links_handler))
        .route("/links/category/{category}", get(links_by_category_handler))
}
