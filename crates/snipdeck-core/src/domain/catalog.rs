//! Category and tag domain types.
//!
//! Categories are flat (no hierarchy) and tags are plain labels. Name
//! uniqueness is not enforced for either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snippet::{deserialize_author, unknown_author};

/// A category that exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display hint, typically a hex color such as `"#3b82f6"`.
    pub color: String,
    #[serde(default = "unknown_author", deserialize_with = "deserialize_author")]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// A category to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub created_by: String,
}

/// Partial category update.
///
/// Blank values are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryUpdate {
    /// Drop blank fields and trim the remaining ones.
    #[must_use]
    pub fn cleaned(self) -> Self {
        let keep = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            name: keep(self.name),
            color: keep(self.color),
        }
    }

    /// Whether the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}

/// A tag that exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default = "unknown_author", deserialize_with = "deserialize_author")]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// A tag to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub name: String,
    pub created_by: String,
}
