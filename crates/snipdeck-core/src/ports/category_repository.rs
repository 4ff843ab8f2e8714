//! Category repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Category, CategoryUpdate, NewCategory};

/// Repository for category persistence operations.
///
/// Deleting a category does not touch snippets that reference it; those
/// keep a dangling category ID.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories, newest first.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Get a category by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the category doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<Category, RepositoryError>;

    /// Insert a new category and return it with its assigned ID.
    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError>;

    /// Apply the non-empty fields of `update`.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the category doesn't exist.
    async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<Category, RepositoryError>;

    /// Delete a category by its ID.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
