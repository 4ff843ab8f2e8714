//! Tag repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTag, Tag};

/// Repository for tag persistence operations.
///
/// Tags have no update operation; rename by delete and re-create.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List all tags, newest first.
    async fn list(&self) -> Result<Vec<Tag>, RepositoryError>;

    /// Get a tag by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the tag doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<Tag, RepositoryError>;

    /// Find a tag by exact name. Returns `Ok(None)` when absent.
    ///
    /// If several tags share the name, the oldest is returned.
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepositoryError>;

    /// Insert a new tag and return it with its assigned ID.
    async fn insert(&self, tag: &NewTag) -> Result<Tag, RepositoryError>;

    /// Delete a tag by its ID.
    ///
    /// Snippets referencing the tag keep the dangling ID.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
