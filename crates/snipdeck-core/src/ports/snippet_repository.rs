//! Snippet repository trait definition.
//!
//! This port defines the interface for snippet persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewSnippet, Snippet, SnippetPatch};

/// Repository for snippet persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Validation, normalization and permission checks belong in
///   `SnippetService`, not here
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// List all snippets, most recently updated first.
    async fn list(&self) -> Result<Vec<Snippet>, RepositoryError>;

    /// Get a snippet by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the snippet doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<Snippet, RepositoryError>;

    /// Insert a new snippet.
    ///
    /// The store assigns the ID and sets both timestamps to the same instant.
    async fn insert(&self, snippet: &NewSnippet) -> Result<Snippet, RepositoryError>;

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Returns the updated snippet, or `Err(RepositoryError::NotFound)` if
    /// the snippet doesn't exist.
    async fn update(&self, id: &str, patch: &SnippetPatch) -> Result<Snippet, RepositoryError>;

    /// Delete a snippet by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the snippet doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
