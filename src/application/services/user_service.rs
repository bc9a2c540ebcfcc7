//! User accounts and session authentication.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Raw bytes of entropy behind each session token.
const TOKEN_LENGTH_BYTES: usize = 32;

/// Service for user registration, login, and current-user resolution.
///
/// Passwords and session tokens are both stored as HMAC-SHA256 digests
/// keyed by `signing_secret`. An attacker with read-only access to the
/// database cannot verify or forge either without the server-side secret.
pub struct UserService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    signing_secret: String,
}

impl<U: UserRepository, S: SessionRepository> UserService<U, S> {
    /// Creates a new user service.
    pub fn new(users: Arc<U>, sessions: Arc<S>, signing_secret: String) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
        }
    }

    /// Hashes a secret (password or raw token) with HMAC-SHA256.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_secret(&self, value: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on empty username or password,
    /// [`AppError::Conflict`] when the username is already registered.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() {
            return Err(AppError::bad_request(
                "Required parameter `username` is missing or empty",
                json!({ "parameter": "username" }),
            ));
        }
        if password.is_empty() {
            return Err(AppError::bad_request(
                "Required parameter `password` is missing or empty",
                json!({ "parameter": "password" }),
            ));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                format!("User `{username}` is already registered"),
                json!({ "username": username }),
            ));
        }

        self.users
            .create(NewUser {
                username: username.to_string(),
                password_hash: self.hash_secret(password),
            })
            .await
    }

    /// Verifies credentials and opens a session.
    ///
    /// Returns the raw bearer token; only its hash is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown username or wrong
    /// password — the two are deliberately indistinguishable.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let invalid_credentials =
            || AppError::unauthorized("Invalid username or password", json!({}));

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        if user.password_hash != self.hash_secret(password) {
            return Err(invalid_credentials());
        }

        let token = generate_token();
        self.sessions
            .create(user.id, &self.hash_secret(&token))
            .await?;

        Ok(token)
    }

    /// Resolves the authenticated user behind a bearer token.
    ///
    /// Owner-scoped operations call this before touching any storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the token matches no
    /// session or the session's user no longer exists.
    pub async fn current_user(&self, token: &str) -> Result<User, AppError> {
        let invalid_token =
            || AppError::unauthorized("Invalid or expired session token", json!({}));

        let user_id = self
            .sessions
            .find_user_id(&self.hash_secret(token))
            .await?
            .ok_or_else(invalid_token)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(invalid_token)
    }
}

/// Generates an opaque URL-safe session token.
fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSessionRepository, MockUserRepository};
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn service(
        users: MockUserRepository,
        sessions: MockSessionRepository,
    ) -> UserService<MockUserRepository, MockSessionRepository> {
        UserService::new(Arc::new(users), Arc::new(sessions), test_secret())
    }

    fn stored_user(id: i64, username: &str, password_hash: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        }
    }

    fn hash_with_test_secret(value: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[tokio::test]
    async fn test_register_success_stores_hash_not_password() {
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let expected_hash = hash_with_test_secret("hunter2");
        users
            .expect_create()
            .withf(move |new_user| {
                new_user.username == "ada"
                    && new_user.password_hash == expected_hash
                    && new_user.password_hash != "hunter2"
            })
            .times(1)
            .returning(|new_user| Ok(stored_user(1, &new_user.username, &new_user.password_hash)));

        let user = service(users, MockSessionRepository::new())
            .register("ada", "hunter2")
            .await
            .unwrap();

        assert_eq!(user.username, "ada");
        assert_eq!(user.password_hash.len(), 64);
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let mut users = MockUserRepository::new();

        users.expect_find_by_username().times(1).returning(|name| {
            Ok(Some(stored_user(1, name, &hash_with_test_secret("pw"))))
        });
        users.expect_create().times(0);

        let result = service(users, MockSessionRepository::new())
            .register("ada", "hunter2")
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_empty_inputs_fail_before_storage() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().times(0);
        users.expect_create().times(0);

        let svc = service(users, MockSessionRepository::new());

        assert!(matches!(
            svc.register("", "hunter2").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            svc.register("ada", "").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_login_issues_token_and_stores_its_hash() {
        let mut users = MockUserRepository::new();
        let mut sessions = MockSessionRepository::new();

        users.expect_find_by_username().times(1).returning(|name| {
            Ok(Some(stored_user(
                7,
                name,
                &hash_with_test_secret("hunter2"),
            )))
        });

        sessions
            .expect_create()
            .withf(|&user_id, token_hash| user_id == 7 && token_hash.len() == 64)
            .times(1)
            .returning(|_, _| Ok(()));

        let token = service(users, sessions).login("ada", "hunter2").await.unwrap();

        // 32 bytes of entropy → 43 chars of URL-safe base64, no padding.
        assert_eq!(token.len(), 43);
        assert!(!token.contains('='));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let mut users = MockUserRepository::new();
        let mut sessions = MockSessionRepository::new();

        users.expect_find_by_username().times(1).returning(|name| {
            Ok(Some(stored_user(
                7,
                name,
                &hash_with_test_secret("hunter2"),
            )))
        });
        sessions.expect_create().times(0);

        let result = service(users, sessions).login("ada", "wrong").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(users, MockSessionRepository::new())
            .login("ghost", "pw")
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_current_user_resolves_session() {
        let mut users = MockUserRepository::new();
        let mut sessions = MockSessionRepository::new();

        let expected_hash = hash_with_test_secret("raw-token");
        sessions
            .expect_find_user_id()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(7)));

        users
            .expect_find_by_id()
            .withf(|&id| id == 7)
            .times(1)
            .returning(|id| Ok(Some(stored_user(id, "ada", &hash_with_test_secret("pw")))));

        let user = service(users, sessions).current_user("raw-token").await.unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ada");
    }

    #[tokio::test]
    async fn test_current_user_unknown_token_is_unauthorized() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(MockUserRepository::new(), sessions)
            .current_user("bogus")
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_hash_secret_is_deterministic_and_keyed() {
        let svc1 = service(MockUserRepository::new(), MockSessionRepository::new());
        assert_eq!(svc1.hash_secret("value"), svc1.hash_secret("value"));
        assert_ne!(svc1.hash_secret("value"), svc1.hash_secret("other"));

        let svc2 = UserService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSessionRepository::new()),
            "another-secret".to_string(),
        );
        assert_ne!(svc1.hash_secret("value"), svc2.hash_secret("value"));
    }

    #[test]
    fn test_generate_token_is_url_safe_and_unique() {
        let a = generate_token();
        let b = generate_token();

        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }
}
