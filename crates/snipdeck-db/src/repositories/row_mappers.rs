//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use snipdeck_core::domain::author_or_unknown;
use snipdeck_core::{Category, RepositoryError, Snippet, Tag};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use std::collections::BTreeSet;

/// Shared SELECT column list for snippet queries.
pub const SNIPPET_SELECT_COLUMNS: &str =
    "id, name, description, code, author, category, tags, created_at, updated_at";

/// Shared SELECT column list for category queries.
pub const CATEGORY_SELECT_COLUMNS: &str = "id, name, color, created_by, created_at";

/// Shared SELECT column list for tag queries.
pub const TAG_SELECT_COLUMNS: &str = "id, name, created_by, created_at";

/// Fixed-width RFC 3339 text, so lexical order matches time order.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 as written by this crate and the `YYYY-MM-DD HH:MM:SS`
/// form produced by `SQLite`'s `datetime('now')`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    let trimmed = raw.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {raw:?}: {e}")))
}

/// Encode a tag set as a JSON array.
pub fn tags_to_json(tags: &BTreeSet<String>) -> Result<String, RepositoryError> {
    serde_json::to_string(tags).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn tags_from_json(raw: &str) -> Result<BTreeSet<String>, RepositoryError> {
    if raw.trim().is_empty() {
        return Ok(BTreeSet::new());
    }
    serde_json::from_str(raw).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a database row into a Snippet.
pub fn row_to_snippet(row: &SqliteRow) -> Result<Snippet, RepositoryError> {
    let tags_json: String = column(row, "tags")?;
    let created_at: String = column(row, "created_at")?;
    let updated_at: String = column(row, "updated_at")?;

    Ok(Snippet {
        id: column(row, "id")?,
        name: column(row, "name")?,
        description: column(row, "description")?,
        code: column(row, "code")?,
        author: author_or_unknown(column(row, "author")?),
        category: column(row, "category")?,
        tags: tags_from_json(&tags_json)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// Parse a database row into a Category.
pub fn row_to_category(row: &SqliteRow) -> Result<Category, RepositoryError> {
    let created_at: String = column(row, "created_at")?;

    Ok(Category {
        id: column(row, "id")?,
        name: column(row, "name")?,
        color: column(row, "color")?,
        created_by: author_or_unknown(column(row, "created_by")?),
        created_at: parse_timestamp(&created_at)?,
    })
}

/// Parse a database row into a Tag.
pub fn row_to_tag(row: &SqliteRow) -> Result<Tag, RepositoryError> {
    let created_at: String = column(row, "created_at")?;

    Ok(Tag {
        id: column(row, "id")?,
        name: column(row, "name")?,
        created_by: author_or_unknown(column(row, "created_by")?),
        created_at: parse_timestamp(&created_at)?,
    })
}
