//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use snipdeck_core::{AppCore, CoreError, Repos, Settings};

use crate::repositories::{SqliteCategoryRepository, SqliteSnippetRepository, SqliteTagRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `snipdeck-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteSnippetRepository::new(pool.clone())),
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteTagRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool and settings.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, settings)?;
    /// ```
    pub fn build_app_core(pool: SqlitePool, settings: &Settings) -> Result<AppCore, CoreError> {
        AppCore::new(Self::build_repos(pool), settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use snipdeck_core::{AuthContext, FilterSpec, SnippetDraft, normalize};

    #[tokio::test]
    async fn test_app_core_round_trip_over_sqlite() {
        let pool = setup_test_database().await.unwrap();
        let core = CoreFactory::build_app_core(pool, &Settings::with_defaults()).unwrap();
        let auth = AuthContext::user("dana@example.com");

        let tag = core.catalog().get_or_create_tag(&auth, "forms").await.unwrap();
        let again = core.catalog().get_or_create_tag(&auth, "forms").await.unwrap();
        assert_eq!(tag.id, again.id);

        let input = "function Login() { return null }";
        let mut draft = SnippetDraft::new("Login", input);
        draft.tags = vec![tag.id.clone(), tag.id.clone()];
        let created = core.snippets().submit(&auth, draft).await.unwrap();

        let fetched = core.snippets().get(&created.id).await.unwrap();
        assert_eq!(fetched.code, normalize(input));
        assert_eq!(fetched.tags.len(), 1);

        let spec = FilterSpec {
            tags: [tag.id].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(core.snippets().browse(&spec).await.unwrap().len(), 1);

        let manifest = core.snippets().view(&created.id).await.unwrap();
        assert_eq!(manifest.entry_code(), Some(fetched.code.as_str()));
    }

    #[tokio::test]
    async fn test_invalid_settings_rejected() {
        let pool = setup_test_database().await.unwrap();
        let settings = Settings {
            css_framework_url: Some(String::new()),
            ..Default::default()
        };
        assert!(CoreFactory::build_app_core(pool, &settings).is_err());
    }
}
