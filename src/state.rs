//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::infrastructure::persistence::{
    PgLinkRepository, PgSessionRepository, PgUserRepository,
};

/// Link service wired to PostgreSQL storage.
pub type Links = LinkService<PgLinkRepository>;

/// User service wired to PostgreSQL storage.
pub type Users = UserService<PgUserRepository, PgSessionRepository>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<Links>,
    pub user_service: Arc<Users>,
}
