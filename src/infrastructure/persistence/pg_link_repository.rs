//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const LINK_COLUMNS: &str = "id, user_id, url, code, short_url, category, counter, updated_at";

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            r#"
            INSERT INTO links (user_id, url, code, short_url, category, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(new_link.user_id)
        .bind(&new_link.url)
        .bind(&new_link.code)
        .bind(&new_link.short_url)
        .bind(&new_link.category)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn find_by_owner_and_category(
        &self,
        user_id: i64,
        category: &str,
    ) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE user_id = $1 AND category = $2 ORDER BY id"
        ))
        .bind(user_id)
        .bind(category)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn update(&self, link: &Link) -> Result<Link, AppError> {
        let updated = sqlx::query_as::<_, Link>(&format!(
            r#"
            UPDATE links
            SET url = $2, category = $3, updated_at = $4
            WHERE id = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(link.id)
        .bind(&link.url)
        .bind(&link.category)
        .bind(link.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        updated.ok_or_else(|| {
            AppError::not_found(
                format!("Link with id {} not found", link.id),
                serde_json::json!({ "id": link.id }),
            )
        })
    }

    async fn increment_counter(&self, id: i64) -> Result<Option<Link>, AppError> {
        // Single-statement increment: concurrent visits serialize in
        // Postgres, no read-modify-write race in process.
        let link = sqlx::query_as::<_, Link>(&format!(
            r#"
            UPDATE links
            SET counter = counter + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
