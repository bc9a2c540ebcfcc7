//! Link lifecycle service: creation, ownership-scoped CRUD, resolution,
//! and visit accounting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Link, NewLink, User};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum attempts at random code generation before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service orchestrating the link lifecycle.
///
/// Owner-scoped operations take the resolved [`User`] explicitly — there is
/// no ambient identity. Every operation validates its inputs before any
/// repository call; an id that exists but belongs to another user is
/// indistinguishable from a missing id.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    base_url: String,
    code_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the scheme + host prefix for short URLs; a trailing
    /// slash is tolerated and stripped.
    pub fn new(repository: Arc<L>, base_url: impl Into<String>, code_length: usize) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            code_length,
        }
    }

    /// Creates a short link owned by `user`.
    ///
    /// Generates a random code (retrying on collision, see
    /// [`Self::generate_unique_code`]), derives the short URL from the
    /// configured base URL, and persists the record with a zero counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `url` or `category` is empty,
    /// before any storage access.
    pub async fn create(&self, user: &User, url: &str, category: &str) -> Result<Link, AppError> {
        require_non_empty(url, "url")?;
        require_non_empty(category, "category")?;

        let code = self.generate_unique_code().await?;
        let short_url = format!("{}/{}", self.base_url, code);

        let new_link = NewLink {
            user_id: user.id,
            url: url.to_string(),
            code,
            short_url,
            category: category.to_string(),
        };

        self.repository.create(new_link).await
    }

    /// Updates the destination and category of a link owned by `user`.
    ///
    /// The code and short URL never change on update; `updated_at` is
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on empty fields or `id < 1`,
    /// [`AppError::NotFound`] when `user` owns no link with this id.
    pub async fn update(
        &self,
        user: &User,
        id: i64,
        url: &str,
        category: &str,
    ) -> Result<Link, AppError> {
        require_positive_id(id)?;
        require_non_empty(url, "url")?;
        require_non_empty(category, "category")?;

        let mut link = self.get_by_id(user, id).await?;
        link.url = url.to_string();
        link.category = category.to_string();
        link.updated_at = Utc::now();

        self.repository.update(&link).await
    }

    /// Deletes a link owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id < 1`,
    /// [`AppError::NotFound`] when `user` owns no link with this id.
    pub async fn delete(&self, user: &User, id: i64) -> Result<(), AppError> {
        require_positive_id(id)?;

        let link = self.get_by_id(user, id).await?;

        if !self.repository.delete(link.id).await? {
            return Err(link_not_found(id));
        }

        Ok(())
    }

    /// Fetches a link by id, scoped to `user`'s own links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id < 1`,
    /// [`AppError::NotFound`] when the id is missing **or** owned by
    /// someone else — the two cases are indistinguishable to the caller.
    pub async fn get_by_id(&self, user: &User, id: i64) -> Result<Link, AppError> {
        require_positive_id(id)?;

        match self.repository.find_by_id(id).await? {
            Some(link) if link.user_id == user.id => Ok(link),
            _ => Err(link_not_found(id)),
        }
    }

    /// Fetches a link by its public code. Not owner-scoped — this is the
    /// public resolution path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `code` is empty,
    /// [`AppError::NotFound`] when no link carries this code.
    pub async fn get_by_code(&self, code: &str) -> Result<Link, AppError> {
        require_non_empty(code, "code")?;

        self.repository.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Link with code `{code}` not found"),
                json!({ "code": code }),
            )
        })
    }

    /// Records a visit on an already-resolved link: increments the counter
    /// by exactly one and refreshes `updated_at`, atomically at the storage
    /// layer. Returns the updated record.
    pub async fn visit(&self, link: &Link) -> Result<Link, AppError> {
        self.repository
            .increment_counter(link.id)
            .await?
            .ok_or_else(|| link_not_found(link.id))
    }

    /// Returns all links owned by `user`.
    pub async fn get_all(&self, user: &User) -> Result<Vec<Link>, AppError> {
        self.repository.find_by_owner(user.id).await
    }

    /// Returns `user`'s links in a category. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `category` is empty.
    pub async fn get_by_category(
        &self,
        user: &User,
        category: &str,
    ) -> Result<Vec<Link>, AppError> {
        require_non_empty(category, "category")?;

        self.repository
            .find_by_owner_and_category(user.id, category)
            .await
    }

    /// Generates a short code that no existing link uses.
    ///
    /// Attempts up to [`MAX_CODE_ATTEMPTS`] random codes before failing.
    /// The UNIQUE constraint on `links.code` backstops the window between
    /// the check and the insert.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}

fn require_non_empty(value: &str, name: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("Required parameter `{name}` is missing or empty"),
            json!({ "parameter": name }),
        ));
    }

    Ok(())
}

fn require_positive_id(id: i64) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::bad_request(
            "Parameter `id` must be greater than 0",
            json!({ "id": id }),
        ));
    }

    Ok(())
}

fn link_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Link with id {id} not found"), json!({ "id": id }))
}
