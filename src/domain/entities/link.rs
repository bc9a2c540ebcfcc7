//! Link entity representing a shortened URL owned by a user.

use chrono::{DateTime, Utc};

/// A short-URL record.
///
/// `code` is assigned once at creation and never mutated afterwards;
/// `short_url` is derived from the configured base URL at creation time and
/// is not recomputed if the base URL later changes. `counter` only grows,
/// and only through the visit operation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub code: String,
    pub short_url: String,
    pub category: String,
    pub counter: i64,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new link; `id` and `counter` are assigned by
/// storage.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub user_id: i64,
    pub url: String,
    pub code: String,
    pub short_url: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_construction() {
        let now = Utc::now();
        let link = Link {
            id: 1,
            user_id: 7,
            url: "https://example.com".to_string(),
            code: "Ab3xZ".to_string(),
            short_url: "https://s.test/Ab3xZ".to_string(),
            category: "news".to_string(),
            counter: 0,
            updated_at: now,
        };

        assert_eq!(link.id, 1);
        assert_eq!(link.user_id, 7);
        assert_eq!(link.counter, 0);
        assert_eq!(link.updated_at, now);
    }

    #[test]
    fn test_new_link_carries_owner() {
        let new_link = NewLink {
            user_id: 42,
            url: "https://rust-lang.org".to_string(),
            code: "xyz78".to_string(),
            short_url: "https://s.test/xyz78".to_string(),
            category: "docs".to_string(),
        };

        assert_eq!(new_link.user_id, 42);
        assert_eq!(new_link.code, "xyz78");
    }
}
