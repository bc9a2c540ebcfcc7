//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/link`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[validate(length(min = 1, max = 255, message = "Category must be 1-255 characters"))]
    pub category: String,
}

/// Request body for `PUT /api/link/{id}`. Both fields are required — the
/// update replaces the destination and category wholesale.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[validate(length(min = 1, max = 255, message = "Category must be 1-255 characters"))]
    pub category: String,
}

/// Boundary representation of a link.
///
/// Field names and casing are part of the API contract:
/// `id, url, code, shortUrl, category, counter, updatedAt, userId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub short_url: String,
    pub category: String,
    pub counter: i64,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            code: link.code,
            short_url: link.short_url,
            category: link.category,
            counter: link.counter,
            updated_at: link.updated_at,
            user_id: link.user_id,
        }
    }
}

/// Response wrapping a list of links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}

impl LinkListResponse {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            links: links.into_iter().map(LinkResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_serializes_contract_fields() {
        let response = LinkResponse::from(Link {
            id: 3,
            user_id: 9,
            url: "https://example.com".to_string(),
            code: "aB9xK".to_string(),
            short_url: "https://s.test/aB9xK".to_string(),
            category: "news".to_string(),
            counter: 4,
            updated_at: Utc::now(),
        });

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "category", "code", "counter", "id", "shortUrl", "updatedAt", "url", "userId"
            ]
        );
        assert_eq!(value["shortUrl"], "https://s.test/aB9xK");
        assert_eq!(value["userId"], 9);
        assert_eq!(value["counter"], 4);
    }
}
