//! Gallery filtering and sorting.
//!
//! The store returns every snippet; narrowing and ordering happen here, in
//! memory. Filters combine with AND across fields and OR within a set, and an
//! empty set never constrains anything.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::{Snippet, Tag};

/// Sort key for gallery listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    UpdatedAt,
    CreatedAt,
    Name,
    Author,
}

/// Sort direction for gallery listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

/// Error returned when parsing an unknown sort key or direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseSortError {
    kind: &'static str,
    value: String,
}

fn canonical(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for SortBy {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "updatedat" | "updated" => Ok(Self::UpdatedAt),
            "createdat" | "created" => Ok(Self::CreatedAt),
            "name" => Ok(Self::Name),
            "author" => Ok(Self::Author),
            _ => Err(ParseSortError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "desc" | "descending" => Ok(Self::Desc),
            "asc" | "ascending" => Ok(Self::Asc),
            _ => Err(ParseSortError {
                kind: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UpdatedAt => "updatedAt",
            Self::CreatedAt => "createdAt",
            Self::Name => "name",
            Self::Author => "author",
        })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        })
    }
}

/// Filter and sort criteria for a gallery listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name, description, author.
    pub search: Option<String>,
    /// Category IDs; the snippet's category must be one of them.
    pub categories: BTreeSet<String>,
    /// Tag IDs; the snippet must carry at least one of them.
    pub tags: BTreeSet<String>,
    /// Author identities; the snippet's author must be one of them.
    pub authors: BTreeSet<String>,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

impl FilterSpec {
    /// Lowercased search text, or `None` when blank.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether any filter (not sort) is set.
    pub fn is_active(&self) -> bool {
        self.search_needle().is_some()
            || !self.categories.is_empty()
            || !self.tags.is_empty()
            || !self.authors.is_empty()
    }

    /// Clear every filter and restore the default sort.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `snippet` satisfies every filter in this spec.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_with(snippet, self.search_needle().as_deref())
    }

    fn matches_with(&self, snippet: &Snippet, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let hit = snippet.name.to_lowercase().contains(needle)
                || snippet
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(needle))
                || snippet.author.to_lowercase().contains(needle);
            if !hit {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !snippet
                .category
                .as_ref()
                .is_some_and(|c| self.categories.contains(c))
        {
            return false;
        }

        if !self.tags.is_empty() && self.tags.is_disjoint(&snippet.tags) {
            return false;
        }

        if !self.authors.is_empty() && !self.authors.contains(&snippet.author) {
            return false;
        }

        true
    }

    /// Ordering of two snippets under this spec's sort key and direction.
    pub fn compare(&self, a: &Snippet, b: &Snippet) -> Ordering {
        let ord = match self.sort_by {
            SortBy::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortBy::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
        };
        match self.sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Filter and sort `all` according to `spec`.
///
/// The input is not modified. Snippets with equal sort keys keep their
/// input order in both directions.
pub fn query<'a>(all: &'a [Snippet], spec: &FilterSpec) -> Vec<&'a Snippet> {
    let needle = spec.search_needle();
    let mut hits: Vec<&Snippet> = all
        .iter()
        .filter(|s| spec.matches_with(s, needle.as_deref()))
        .collect();
    hits.sort_by(|a, b| spec.compare(a, b));
    hits
}

/// Values available for building filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Distinct authors, sorted.
    pub authors: Vec<String>,
    /// Category IDs referenced by at least one snippet.
    pub category_ids: BTreeSet<String>,
    /// Tag IDs referenced by at least one snippet.
    pub tag_ids: BTreeSet<String>,
}

impl FilterOptions {
    pub fn from_snippets(snippets: &[Snippet]) -> Self {
        let mut authors = BTreeSet::new();
        let mut category_ids = BTreeSet::new();
        let mut tag_ids = BTreeSet::new();
        for snippet in snippets {
            authors.insert(snippet.author.clone());
            if let Some(ref category) = snippet.category {
                category_ids.insert(category.clone());
            }
            tag_ids.extend(snippet.tags.iter().cloned());
        }
        Self {
            authors: authors.into_iter().collect(),
            category_ids,
            tag_ids,
        }
    }
}

/// The live tags a snippet references, skipping IDs of deleted tags.
pub fn resolve_tags<'a>(snippet: &Snippet, live_tags: &'a [Tag]) -> Vec<&'a Tag> {
    snippet
        .tags
        .iter()
        .filter_map(|id| live_tags.iter().find(|t| &t.id == id))
        .collect()
}
