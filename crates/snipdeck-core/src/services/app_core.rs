//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use crate::ports::{CoreError, Repos};
use crate::settings::{Settings, validate_settings};

use super::{CatalogService, SnippetService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, &Settings::with_defaults())?;
///
/// let snippets = core.snippets().list().await?;
/// ```
pub struct AppCore {
    snippets: SnippetService,
    catalog: CatalogService,
    settings: Settings,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and validated settings.
    pub fn new(repos: Repos, settings: &Settings) -> Result<Self, CoreError> {
        validate_settings(settings)?;
        Ok(Self {
            snippets: SnippetService::new(repos.snippets, settings),
            catalog: CatalogService::new(repos.categories, repos.tags),
            settings: settings.clone(),
        })
    }

    /// Access the snippet service.
    pub const fn snippets(&self) -> &SnippetService {
        &self.snippets
    }

    /// Access the category and tag service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// The settings this core was built with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Category, CategoryUpdate, NewCategory, NewSnippet, NewTag, Snippet, SnippetPatch, Tag,
    };
    use crate::ports::{CategoryRepository, RepositoryError, SnippetRepository, TagRepository};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct EmptyStore;

    #[async_trait]
    impl SnippetRepository for EmptyStore {
        async fn list(&self) -> Result<Vec<Snippet>, RepositoryError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, id: &str) -> Result<Snippet, RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
        async fn insert(&self, _snippet: &NewSnippet) -> Result<Snippet, RepositoryError> {
            unimplemented!()
        }
        async fn update(&self, id: &str, _patch: &SnippetPatch) -> Result<Snippet, RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
    }

    #[async_trait]
    impl CategoryRepository for EmptyStore {
        async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, id: &str) -> Result<Category, RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
        async fn insert(&self, _category: &NewCategory) -> Result<Category, RepositoryError> {
            unimplemented!()
        }
        async fn update(
            &self,
            id: &str,
            _update: &CategoryUpdate,
        ) -> Result<Category, RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
        async fn delete(&self, _id: &str) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    #[async_trait]
    impl TagRepository for EmptyStore {
        async fn list(&self) -> Result<Vec<Tag>, RepositoryError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, id: &str) -> Result<Tag, RepositoryError> {
            Err(RepositoryError::NotFound(format!("id={id}")))
        }
        async fn find_by_name(&self, _name: &str) -> Result<Option<Tag>, RepositoryError> {
            Ok(None)
        }
        async fn insert(&self, _tag: &NewTag) -> Result<Tag, RepositoryError> {
            unimplemented!()
        }
        async fn delete(&self, _id: &str) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn repos() -> Repos {
        let store = Arc::new(EmptyStore);
        Repos::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn test_app_core_wires_services() {
        let core = AppCore::new(repos(), &Settings::with_defaults()).unwrap();
        assert!(core.snippets().list().await.unwrap().is_empty());
        assert!(core.catalog().list_categories().await.unwrap().is_empty());
        assert!(core.catalog().list_tags().await.unwrap().is_empty());
        assert_eq!(core.settings(), &Settings::with_defaults());
    }

    #[test]
    fn test_app_core_rejects_invalid_settings() {
        let settings = Settings {
            public_base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let result = AppCore::new(repos(), &settings);
        assert!(matches!(result, Err(CoreError::Settings(_))));
    }
}
