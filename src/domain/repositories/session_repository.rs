//! Repository trait for bearer session tokens.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for session token storage.
///
/// Only HMAC-SHA256 hashes of tokens are stored; raw tokens exist solely in
/// the login response and the client's `Authorization` header.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Records a new session for a user.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<(), AppError>;

    /// Resolves a token hash to the owning user id, if the session exists.
    async fn find_user_id(&self, token_hash: &str) -> Result<Option<i64>, AppError>;
}
