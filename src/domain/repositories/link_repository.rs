//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link storage.
///
/// Every call is atomic and consistent on its own; the service layer never
/// assumes transactions spanning multiple calls. Ownership scoping happens
/// above this trait — lookups here return whatever matches, and the service
/// decides what the caller may see.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the code collides with an
    /// existing one (UNIQUE backstop), [`AppError::Internal`] on other
    /// database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its id, regardless of owner.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds a link by its public short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links belonging to a user.
    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Link>, AppError>;

    /// Lists a user's links in a category. Order is unspecified.
    async fn find_by_owner_and_category(
        &self,
        user_id: i64,
        category: &str,
    ) -> Result<Vec<Link>, AppError>;

    /// Persists the mutable fields of an existing link (`url`, `category`,
    /// `updated_at`) and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches `link.id`.
    async fn update(&self, link: &Link) -> Result<Link, AppError>;

    /// Atomically increments the visit counter and refreshes `updated_at`.
    ///
    /// The increment is a single UPDATE statement, so concurrent visits to
    /// the same link serialize at the database and no count is lost.
    /// Returns `None` when the link no longer exists.
    async fn increment_counter(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Removes a link. Returns `true` when a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
