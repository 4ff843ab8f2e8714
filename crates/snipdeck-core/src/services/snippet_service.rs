//! Snippet service - the ingestion pipeline and snippet lifecycle.

use std::sync::Arc;
use tracing::{debug, info};

use super::guards::{optional_text, require_identity, require_modify, required_text, tag_set};
use crate::domain::{AuthContext, NewSnippet, Snippet, SnippetDraft, SnippetPatch, SnippetUpdate};
use crate::pipeline::{
    ManifestOptions, SandboxManifest, build_public_manifest, normalize, normalize_detailed,
    validate,
};
use crate::ports::{CoreError, SnippetRepository};
use crate::query::{FilterOptions, FilterSpec, query};
use crate::settings::Settings;

/// Service for snippet operations.
///
/// Every write goes through `validate` then `normalize` before it reaches
/// the repository, and every permission check happens before the first
/// mutating repository call.
pub struct SnippetService {
    repo: Arc<dyn SnippetRepository>,
    manifest_options: ManifestOptions,
    public_base_url: String,
}

impl SnippetService {
    /// Create a new snippet service with the given repository and settings.
    pub fn new(repo: Arc<dyn SnippetRepository>, settings: &Settings) -> Self {
        Self {
            repo,
            manifest_options: ManifestOptions::from_settings(settings),
            public_base_url: settings.effective_public_base_url().to_string(),
        }
    }

    /// Validate, normalize and store a new snippet authored by the caller.
    pub async fn submit(&self, auth: &AuthContext, draft: SnippetDraft) -> Result<Snippet, CoreError> {
        let author = require_identity(auth, "submit snippets")?;
        let name = required_text(&draft.name, "name")?;
        let code = prepare_code(&draft.code)?;

        let new_snippet = NewSnippet {
            name,
            description: optional_text(draft.description),
            code,
            author,
            category: optional_text(draft.category),
            tags: tag_set(draft.tags),
        };

        let snippet = self.repo.insert(&new_snippet).await?;
        info!(id = %snippet.id, author = %snippet.author, "Snippet submitted");
        Ok(snippet)
    }

    /// Get a snippet by ID.
    pub async fn get(&self, id: &str) -> Result<Snippet, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// List all snippets, most recently updated first.
    pub async fn list(&self) -> Result<Vec<Snippet>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// List snippets narrowed and ordered by `spec`.
    pub async fn browse(&self, spec: &FilterSpec) -> Result<Vec<Snippet>, CoreError> {
        let all = self.list().await?;
        let hits = query(&all, spec).into_iter().cloned().collect::<Vec<_>>();
        debug!(total = all.len(), matched = hits.len(), "Browse query");
        Ok(hits)
    }

    /// Values available for the gallery's filter controls.
    pub async fn filter_options(&self) -> Result<FilterOptions, CoreError> {
        let all = self.list().await?;
        Ok(FilterOptions::from_snippets(&all))
    }

    /// Apply a partial edit.
    ///
    /// Only the author or an admin may edit. A changed `code` is validated
    /// and normalized again; a blank description clears it.
    pub async fn update(
        &self,
        auth: &AuthContext,
        id: &str,
        update: SnippetUpdate,
    ) -> Result<Snippet, CoreError> {
        let existing = self.get(id).await?;
        require_modify(auth, &existing)?;

        let patch = SnippetPatch {
            name: update
                .name
                .map(|n| required_text(&n, "name"))
                .transpose()?,
            description: update.description.map(optional_text),
            code: update.code.map(|c| prepare_code(&c)).transpose()?,
            category: update.category.map(optional_text),
            tags: update.tags.map(tag_set),
        };

        let snippet = self.repo.update(id, &patch).await?;
        info!(id = %snippet.id, "Snippet updated");
        Ok(snippet)
    }

    /// Delete a snippet. Only the author or an admin may delete.
    pub async fn delete(&self, auth: &AuthContext, id: &str) -> Result<Snippet, CoreError> {
        let existing = self.get(id).await?;
        require_modify(auth, &existing)?;

        self.repo.delete(id).await?;
        info!(id = %existing.id, "Snippet deleted");
        Ok(existing)
    }

    /// Public view manifest for a stored snippet.
    ///
    /// Stored code is normalized again, which is a no-op for anything that
    /// came through `submit` and repairs legacy records.
    pub async fn view(&self, id: &str) -> Result<SandboxManifest, CoreError> {
        let snippet = self.get(id).await?;
        Ok(build_public_manifest(
            &normalize(&snippet.code),
            &self.manifest_options,
        ))
    }

    /// Absolute public view URL for a snippet.
    pub fn view_url(&self, snippet: &Snippet) -> String {
        format!("{}{}", self.public_base_url, snippet.view_path())
    }
}

/// Validator then normalizer.
fn prepare_code(code: &str) -> Result<String, CoreError> {
    validate(code).into_result()?;
    let normalized = normalize_detailed(code);
    if normalized.repaired {
        debug!("Repaired truncated function keyword");
    }
    if let Some(ref entry) = normalized.appended_export {
        debug!(entry = %entry.name, source = ?entry.source, "Appended default export");
    }
    Ok(normalized.code)
}
