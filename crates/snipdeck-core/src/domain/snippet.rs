//! Snippet domain types.
//!
//! These types represent submitted UI-component snippets, independent of
//! how or where they are stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Author recorded for legacy snippets created before sign-in was required.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Resolve an optional author to a displayable identity.
///
/// Missing or blank authors collapse to [`UNKNOWN_AUTHOR`].
pub fn author_or_unknown(author: Option<String>) -> String {
    author
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

pub(super) fn unknown_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

pub(super) fn deserialize_author<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let author: Option<String> = Option::deserialize(deserializer)?;
    Ok(author_or_unknown(author))
}

// ─────────────────────────────────────────────────────────────────────────────
// Snippet Types
// ─────────────────────────────────────────────────────────────────────────────

/// A snippet that exists in the store with an assigned ID.
///
/// Use `NewSnippet` for snippets that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// Display label, never empty.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Normalized component source.
    pub code: String,
    /// Identity of the creating user (`"Unknown"` on legacy records).
    #[serde(
        default = "unknown_author",
        deserialize_with = "deserialize_author"
    )]
    pub author: String,
    /// Category ID, or `None` when uncategorized.
    #[serde(default)]
    pub category: Option<String>,
    /// Tag IDs. Some may refer to tags that have since been deleted.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// UTC timestamp fixed at creation.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Whether `identity` is the recorded author of this snippet.
    pub fn is_authored_by(&self, identity: &str) -> bool {
        self.author == identity
    }

    /// Path of the public view route for this snippet.
    pub fn view_path(&self) -> String {
        format!("/view/{}", self.id)
    }
}

/// A snippet ready to be handed to the store (no ID or timestamps yet).
///
/// Built by `SnippetService` after validation and normalization; the store
/// assigns `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnippet {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: BTreeSet<String>,
}

/// Raw user submission, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub code: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Tag IDs as selected by the user; duplicates are allowed here.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SnippetDraft {
    /// Create a draft with only the required fields set.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Default::default()
        }
    }
}

/// Partial user edit of an existing snippet.
///
/// Each field is optional:
/// - `None` = don't change this field
/// - `Some(None)` = clear the field (nullable fields only)
/// - `Some(Some(value))` / `Some(value)` = set the field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub code: Option<String>,
    pub category: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

/// Validated partial update handed to the store.
///
/// `code`, when present, is already normalized. The store refreshes
/// `updated_at` whenever it applies a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub code: Option<String>,
    pub category: Option<Option<String>>,
    pub tags: Option<BTreeSet<String>>,
}

impl SnippetPatch {
    /// Apply this patch to a snippet in memory.
    ///
    /// Timestamps are left untouched; refreshing them is the store's job.
    pub fn apply_to(&self, snippet: &mut Snippet) {
        if let Some(ref name) = self.name {
            snippet.name.clone_from(name);
        }
        if let Some(ref description) = self.description {
            snippet.description.clone_from(description);
        }
        if let Some(ref code) = self.code {
            snippet.code.clone_from(code);
        }
        if let Some(ref category) = self.category {
            snippet.category.clone_from(category);
        }
        if let Some(ref tags) = self.tags {
            snippet.tags.clone_from(tags);
        }
    }
}
