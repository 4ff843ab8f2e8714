//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_category_repository;
mod sqlite_snippet_repository;
mod sqlite_tag_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_snippet_repository::SqliteSnippetRepository;
pub use sqlite_tag_repository::SqliteTagRepository;
