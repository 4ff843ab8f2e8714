//! `SQLite` implementation of the `SnippetRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use snipdeck_core::{NewSnippet, RepositoryError, Snippet, SnippetPatch, SnippetRepository};

use super::row_mappers::{SNIPPET_SELECT_COLUMNS, format_timestamp, row_to_snippet, tags_to_json};

/// `SQLite` implementation of the `SnippetRepository` trait.
pub struct SqliteSnippetRepository {
    pool: SqlitePool,
}

impl SqliteSnippetRepository {
    /// Create a new `SQLite` snippet repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl SnippetRepository for SqliteSnippetRepository {
    async fn list(&self) -> Result<Vec<Snippet>, RepositoryError> {
        let query = format!(
            "SELECT {SNIPPET_SELECT_COLUMNS} FROM snippets ORDER BY updated_at DESC, rowid DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_snippet).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Snippet, RepositoryError> {
        let query = format!("SELECT {SNIPPET_SELECT_COLUMNS} FROM snippets WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Snippet with ID {id}")))?;

        row_to_snippet(&row)
    }

    async fn insert(&self, snippet: &NewSnippet) -> Result<Snippet, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let now = format_timestamp(&Utc::now());
        let tags_json = tags_to_json(&snippet.tags)?;

        sqlx::query(
            "INSERT INTO snippets (id, name, description, code, author, category, tags, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&snippet.name)
        .bind(&snippet.description)
        .bind(&snippet.code)
        .bind(&snippet.author)
        .bind(&snippet.category)
        .bind(&tags_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(format!("Snippet with ID {id}"))
            }
            other => storage(other),
        })?;

        self.get_by_id(&id).await
    }

    async fn update(&self, id: &str, patch: &SnippetPatch) -> Result<Snippet, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let query = format!("SELECT {SNIPPET_SELECT_COLUMNS} FROM snippets WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Snippet with ID {id}")))?;

        let mut snippet = row_to_snippet(&row)?;
        patch.apply_to(&mut snippet);
        snippet.updated_at = Utc::now().max(snippet.created_at);
        let tags_json = tags_to_json(&snippet.tags)?;

        sqlx::query(
            "UPDATE snippets SET name = ?, description = ?, code = ?, category = ?, tags = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&snippet.name)
        .bind(&snippet.description)
        .bind(&snippet.code)
        .bind(&snippet.category)
        .bind(&tags_json)
        .bind(format_timestamp(&snippet.updated_at))
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(storage)?;

        tx.commit().await.map_err(storage)?;
        self.get_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Snippet with ID {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use snipdeck_core::UNKNOWN_AUTHOR;
    use std::collections::BTreeSet;

    async fn repo() -> SqliteSnippetRepository {
        SqliteSnippetRepository::new(setup_test_database().await.unwrap())
    }

    fn new_snippet(name: &str) -> NewSnippet {
        NewSnippet {
            name: name.to_string(),
            description: Some("A card".to_string()),
            code: "function Card() {}\n\nexport default Card;".to_string(),
            author: "dana@example.com".to_string(),
            category: Some("cat-1".to_string()),
            tags: BTreeSet::from(["t1".to_string(), "t2".to_string()]),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;
        let created = repo.insert(&new_snippet("Card")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.tags.len(), 2);

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = repo().await;
        assert!(matches!(
            repo.get_by_id("missing").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_applies_patch_and_refreshes_timestamp() {
        let repo = repo().await;
        let created = repo.insert(&new_snippet("Card")).await.unwrap();

        let patch = SnippetPatch {
            description: Some(None),
            category: Some(None),
            tags: Some(BTreeSet::from(["t3".to_string()])),
            ..Default::default()
        };
        let updated = repo.update(&created.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Card");
        assert_eq!(updated.description, None);
        assert_eq!(updated.category, None);
        assert_eq!(updated.tags, BTreeSet::from(["t3".to_string()]));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= updated.created_at);

        assert_eq!(repo.get_by_id(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = repo().await;
        let result = repo.update("missing", &SnippetPatch::default()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_orders_by_updated_desc() {
        let repo = repo().await;
        let first = repo.insert(&new_snippet("First")).await.unwrap();
        let second = repo.insert(&new_snippet("Second")).await.unwrap();

        let patch = SnippetPatch {
            name: Some("First, edited".to_string()),
            ..Default::default()
        };
        repo.update(&first.id, &patch).await.unwrap();

        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let created = repo.insert(&new_snippet("Card")).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(&created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_legacy_row_without_author() {
        let repo = repo().await;
        sqlx::query(
            "INSERT INTO snippets (id, name, code, created_at, updated_at) \
             VALUES ('legacy', 'Old', 'function Old() {}', '2023-01-01 10:00:00', '2023-01-01 10:00:00')",
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let snippet = repo.get_by_id("legacy").await.unwrap();
        assert_eq!(snippet.author, UNKNOWN_AUTHOR);
        assert!(snippet.tags.is_empty());
        assert!(snippet.description.is_none());
    }
}
