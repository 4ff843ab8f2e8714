//! `SQLite` implementation of the `TagRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use snipdeck_core::{NewTag, RepositoryError, Tag, TagRepository};

use super::row_mappers::{TAG_SELECT_COLUMNS, format_timestamp, row_to_tag};

/// `SQLite` implementation of the `TagRepository` trait.
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    /// Create a new `SQLite` tag repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepositoryError> {
        let query =
            format!("SELECT {TAG_SELECT_COLUMNS} FROM tags ORDER BY created_at DESC, rowid DESC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_tag).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Tag, RepositoryError> {
        let query = format!("SELECT {TAG_SELECT_COLUMNS} FROM tags WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Tag with ID {id}")))?;

        row_to_tag(&row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepositoryError> {
        let query = format!(
            "SELECT {TAG_SELECT_COLUMNS} FROM tags WHERE name = ? ORDER BY created_at ASC, rowid ASC LIMIT 1"
        );

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_tag).transpose()
    }

    async fn insert(&self, tag: &NewTag) -> Result<Tag, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO tags (id, name, created_by, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&tag.name)
            .bind(&tag.created_by)
            .bind(format_timestamp(&Utc::now()))
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(&id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Tag with ID {id}")));
        }
        Ok(())
    }
}
