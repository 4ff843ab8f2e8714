//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Filtering, sorting and authorization belong in services, not here

pub mod category_repository;
pub mod snippet_repository;
pub mod tag_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::pipeline::RejectReason;

// Re-export repository traits for convenience
pub use category_repository::CategoryRepository;
pub use snippet_repository::SnippetRepository;
pub use tag_repository::TagRepository;

/// Container for all repository trait objects.
///
/// Lives in `snipdeck-core` so that `AppCore` can accept it without
/// depending on `snipdeck-db`.
///
/// # Example
///
/// ```ignore
/// // In snipdeck-db factory:
/// let repos = CoreFactory::build_repos(pool);
///
/// // In adapter bootstrap:
/// let core = AppCore::new(repos, settings);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Snippet repository.
    pub snippets: Arc<dyn SnippetRepository>,
    /// Category repository.
    pub categories: Arc<dyn CategoryRepository>,
    /// Tag repository.
    pub tags: Arc<dyn TagRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        snippets: Arc<dyn SnippetRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            snippets,
            categories,
            tags,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Message shown to users for failures that carry no user-correctable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "operation failed";

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, HTTP statuses).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The validator refused the submitted code.
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    /// Validation error (invalid input other than code).
    #[error("{0}")]
    Validation(String),

    /// The caller lacks the identity or privilege for this operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Text safe to show to an end user.
    ///
    /// Rejections and validation errors are shown verbatim; everything else
    /// collapses to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.to_string(),
            Self::Validation(message) => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the error is a missing entity.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_verbatim_for_rejections() {
        let err = CoreError::from(RejectReason::Empty);
        assert_eq!(err.user_message(), "code must not be empty");
        assert_eq!(err.to_string(), "code must not be empty");

        let err = CoreError::Validation("name must not be empty".to_string());
        assert_eq!(err.user_message(), "name must not be empty");
    }

    #[test]
    fn test_user_message_generic_otherwise() {
        let err = CoreError::from(RepositoryError::Storage("disk I/O error".to_string()));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("disk I/O error"));

        let err = CoreError::PermissionDenied("not the author".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_is_not_found() {
        assert!(CoreError::from(RepositoryError::NotFound("x".to_string())).is_not_found());
        assert!(!CoreError::Internal("x".to_string()).is_not_found());
    }
}
