//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, sandbox runtime).
//!
//! # Structure
//!
//! - `snippet` - Snippet types (`Snippet`, `NewSnippet`, drafts and patches)
//! - `catalog` - Category and tag types
//! - `auth` - The injected authorization capability

mod auth;
mod catalog;
mod snippet;

// Re-export snippet types at the domain level for convenience
pub use snippet::{
    NewSnippet, Snippet, SnippetDraft, SnippetPatch, SnippetUpdate, UNKNOWN_AUTHOR,
    author_or_unknown,
};

// Re-export catalog types at the domain level for convenience
pub use catalog::{Category, CategoryUpdate, NewCategory, NewTag, Tag};

pub use auth::AuthContext;
