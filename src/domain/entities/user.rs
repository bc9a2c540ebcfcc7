//! User entity owning shortened links.

use chrono::{DateTime, Utc};

/// An account identified by a unique username.
///
/// `password_hash` is an HMAC-SHA256 hex digest; raw passwords are never
/// stored. Removing a user cascades to their links and sessions at the
/// storage layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction() {
        let user = User {
            id: 3,
            username: "ada".to_string(),
            password_hash: "ab".repeat(32),
            created_at: Utc::now(),
        };

        assert_eq!(user.id, 3);
        assert_eq!(user.username, "ada");
        assert_eq!(user.password_hash.len(), 64);
    }
}
