//! `SQLite` implementation of the `CategoryRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use snipdeck_core::{Category, CategoryRepository, CategoryUpdate, NewCategory, RepositoryError};

use super::row_mappers::{CATEGORY_SELECT_COLUMNS, format_timestamp, row_to_category};

/// `SQLite` implementation of the `CategoryRepository` trait.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new `SQLite` category repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let query = format!(
            "SELECT {CATEGORY_SELECT_COLUMNS} FROM categories ORDER BY created_at DESC, rowid DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_category).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Category, RepositoryError> {
        let query = format!("SELECT {CATEGORY_SELECT_COLUMNS} FROM categories WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Category with ID {id}")))?;

        row_to_category(&row)
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO categories (id, name, color, created_by, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&category.name)
        .bind(&category.color)
        .bind(&category.created_by)
        .bind(format_timestamp(&Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(&id).await
    }

    async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<Category, RepositoryError> {
        // NULL binds leave the column unchanged
        let result = sqlx::query(
            "UPDATE categories SET name = COALESCE(?, name), color = COALESCE(?, color) WHERE id = ?",
        )
        .bind(&update.name)
        .bind(&update.color)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Category with ID {id}")));
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Category with ID {id}")));
        }
        Ok(())
    }
}
