//! PostgreSQL implementation of session repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// PostgreSQL repository for session token storage and lookup.
///
/// Stores HMAC-SHA256 hashes only. Raw tokens are never persisted.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO sessions (user_id, token_hash) VALUES ($1, $2)")
            .bind(user_id)
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_user_id(&self, token_hash: &str) -> Result<Option<i64>, AppError> {
        let user_id: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM sessions WHERE token_hash = $1")
                .bind(token_hash)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(user_id)
    }
}
