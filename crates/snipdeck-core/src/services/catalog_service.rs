//! Catalog service - categories and tags.

use std::sync::Arc;
use tracing::{debug, info};

use super::guards::{optional_text, require_identity, required_text};
use crate::domain::{AuthContext, Category, CategoryUpdate, NewCategory, NewTag, Tag};
use crate::ports::{CategoryRepository, CoreError, TagRepository};

/// Color used when a category is created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

/// Service for category and tag operations.
///
/// Any signed-in user may manage the catalog; there is no ownership model
/// for categories or tags.
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl CatalogService {
    pub fn new(categories: Arc<dyn CategoryRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { categories, tags }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Categories
    // ─────────────────────────────────────────────────────────────────────────

    /// List all categories, newest first.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.categories.list().await.map_err(CoreError::from)
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, CoreError> {
        self.categories.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a category. A blank color falls back to [`DEFAULT_CATEGORY_COLOR`].
    pub async fn create_category(
        &self,
        auth: &AuthContext,
        name: &str,
        color: Option<String>,
    ) -> Result<Category, CoreError> {
        let created_by = require_identity(auth, "create categories")?;
        let category = NewCategory {
            name: required_text(name, "category name")?,
            color: optional_text(color).unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            created_by,
        };

        let category = self.categories.insert(&category).await?;
        info!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Apply the non-blank fields of `update`.
    ///
    /// An update with nothing left after cleaning returns the category
    /// unchanged without writing to the store.
    pub async fn update_category(
        &self,
        auth: &AuthContext,
        id: &str,
        update: CategoryUpdate,
    ) -> Result<Category, CoreError> {
        require_identity(auth, "edit categories")?;
        let update = update.cleaned();
        if update.is_empty() {
            debug!(id, "Empty category update ignored");
            return self.get_category(id).await;
        }
        self.categories
            .update(id, &update)
            .await
            .map_err(CoreError::from)
    }

    /// Delete a category. Snippets keep the dangling category ID.
    pub async fn delete_category(&self, auth: &AuthContext, id: &str) -> Result<(), CoreError> {
        require_identity(auth, "delete categories")?;
        self.categories.delete(id).await?;
        info!(id, "Category deleted");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tags
    // ─────────────────────────────────────────────────────────────────────────

    /// List all tags, newest first.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, CoreError> {
        self.tags.list().await.map_err(CoreError::from)
    }

    pub async fn get_tag(&self, id: &str) -> Result<Tag, CoreError> {
        self.tags.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a tag, even if one with the same name exists.
    pub async fn create_tag(&self, auth: &AuthContext, name: &str) -> Result<Tag, CoreError> {
        let created_by = require_identity(auth, "create tags")?;
        let tag = NewTag {
            name: required_text(name, "tag name")?,
            created_by,
        };

        let tag = self.tags.insert(&tag).await?;
        info!(id = %tag.id, name = %tag.name, "Tag created");
        Ok(tag)
    }

    /// Return the tag with this name, creating it if none exists.
    pub async fn get_or_create_tag(&self, auth: &AuthContext, name: &str) -> Result<Tag, CoreError> {
        let name = required_text(name, "tag name")?;
        if let Some(existing) = self.tags.find_by_name(&name).await? {
            return Ok(existing);
        }
        self.create_tag(auth, &name).await
    }

    /// Delete a tag. Snippets keep the dangling tag ID.
    pub async fn delete_tag(&self, auth: &AuthContext, id: &str) -> Result<(), CoreError> {
        require_identity(auth, "delete tags")?;
        self.tags.delete(id).await?;
        info!(id, "Tag deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockCategoryRepo {
        categories: Mutex<Vec<Category>>,
        writes: Mutex<usize>,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepo {
        async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Category, RepositoryError> {
            self.categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))
        }

        #[allow(clippy::significant_drop_tightening)]
        async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
            let mut categories = self.categories.lock().unwrap();
            let created = Category {
                id: format!("c{}", categories.len() + 1),
                name: category.name.clone(),
                color: category.color.clone(),
                created_by: category.created_by.clone(),
                created_at: Utc::now(),
            };
            categories.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: &str,
            update: &CategoryUpdate,
        ) -> Result<Category, RepositoryError> {
            *self.writes.lock().unwrap() += 1;
            let mut categories = self.categories.lock().unwrap();
            let category = categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))?;
            if let Some(ref name) = update.name {
                category.name.clone_from(name);
            }
            if let Some(ref color) = update.color {
                category.color.clone_from(color);
            }
            Ok(category.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            self.categories.lock().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    mock! {
        TagRepo {}

        #[async_trait]
        impl TagRepository for TagRepo {
            async fn list(&self) -> Result<Vec<Tag>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<Tag, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepositoryError>;
            async fn insert(&self, tag: &NewTag) -> Result<Tag, RepositoryError>;
            async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
        }
    }

    fn tag(id: &str, name: &str) -> Tag {
        Tag {
            id: id.to_string(),
            name: name.to_string(),
            created_by: "dana@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    fn service_with(
        categories: Arc<MockCategoryRepo>,
        tags: MockTagRepo,
    ) -> CatalogService {
        CatalogService::new(categories, Arc::new(tags))
    }

    #[tokio::test]
    async fn test_create_category_defaults_color() {
        let service = service_with(Arc::new(MockCategoryRepo::default()), MockTagRepo::new());
        let category = service
            .create_category(&AuthContext::user("dana@example.com"), " Forms ", None)
            .await
            .unwrap();
        assert_eq!(category.name, "Forms");
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(category.created_by, "dana@example.com");
    }

    #[tokio::test]
    async fn test_create_category_requires_identity() {
        let service = service_with(Arc::new(MockCategoryRepo::default()), MockTagRepo::new());
        let err = service
            .create_category(&AuthContext::anonymous(), "Forms", None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_empty_category_update_is_a_no_op() {
        let repo = Arc::new(MockCategoryRepo::default());
        let service = service_with(Arc::clone(&repo), MockTagRepo::new());
        let auth = AuthContext::user("dana@example.com");
        let created = service.create_category(&auth, "Forms", None).await.unwrap();

        let update = CategoryUpdate {
            name: Some("   ".to_string()),
            color: None,
        };
        let same = service
            .update_category(&auth, &created.id, update)
            .await
            .unwrap();
        assert_eq!(same, created);
        assert_eq!(*repo.writes.lock().unwrap(), 0);

        let update = CategoryUpdate {
            name: None,
            color: Some("#ef4444".to_string()),
        };
        let recolored = service
            .update_category(&auth, &created.id, update)
            .await
            .unwrap();
        assert_eq!(recolored.name, "Forms");
        assert_eq!(recolored.color, "#ef4444");
        assert_eq!(*repo.writes.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_tag_reuses_existing() {
        let mut tags = MockTagRepo::new();
        tags.expect_find_by_name()
            .times(1)
            .returning(|name| Ok(Some(tag("t1", name))));
        tags.expect_insert().never();
        let service = service_with(Arc::new(MockCategoryRepo::default()), tags);

        let found = service
            .get_or_create_tag(&AuthContext::user("eli@example.com"), " forms ")
            .await
            .unwrap();
        assert_eq!(found.id, "t1");
        assert_eq!(found.name, "forms");
    }

    #[tokio::test]
    async fn test_get_or_create_tag_creates_missing() {
        let mut tags = MockTagRepo::new();
        tags.expect_find_by_name().returning(|_| Ok(None));
        tags.expect_insert()
            .times(1)
            .returning(|new_tag| Ok(tag("t9", &new_tag.name)));
        let service = service_with(Arc::new(MockCategoryRepo::default()), tags);

        let created = service
            .get_or_create_tag(&AuthContext::user("eli@example.com"), "charts")
            .await
            .unwrap();
        assert_eq!(created.id, "t9");
    }

    #[tokio::test]
    async fn test_delete_tag_requires_identity() {
        let mut tags = MockTagRepo::new();
        tags.expect_delete().never();
        let service = service_with(Arc::new(MockCategoryRepo::default()), tags);

        let err = service
            .delete_tag(&AuthContext::anonymous(), "t1")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::PermissionDenied(_)));
    }
}
