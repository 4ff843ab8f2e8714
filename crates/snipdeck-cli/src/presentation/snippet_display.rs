//! Snippet display helpers shared by `list` and `show`.

use chrono::{DateTime, Local, Utc};
use snipdeck_core::Snippet;

use super::tables::{format_optional, print_separator, truncate_string};

/// Render a stored UTC timestamp in the local timezone.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Print snippets as a fixed-width table.
pub fn print_snippet_table(snippets: &[Snippet]) {
    println!(
        "{:<36} {:<24} {:<24} {:<12} {:<16}",
        "ID", "Name", "Author", "Category", "Updated"
    );
    print_separator(116);

    for snippet in snippets {
        println!(
            "{:<36} {:<24} {:<24} {:<12} {:<16}",
            snippet.id,
            truncate_string(&snippet.name, 23),
            truncate_string(&snippet.author, 23),
            truncate_string(&format_optional(snippet.category.as_ref(), "--"), 11),
            format_timestamp(&snippet.updated_at),
        );
    }
}

/// Print every field of a snippet, code last.
pub fn print_snippet_detail(snippet: &Snippet) {
    println!("ID:          {}", snippet.id);
    println!("Name:        {}", snippet.name);
    println!(
        "Description: {}",
        format_optional(snippet.description.as_ref(), "--")
    );
    println!("Author:      {}", snippet.author);
    println!(
        "Category:    {}",
        format_optional(snippet.category.as_ref(), "--")
    );
    let tags = if snippet.tags.is_empty() {
        "--".to_string()
    } else {
        snippet.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    println!("Tags:        {tags}");
    println!("Created:     {}", format_timestamp(&snippet.created_at));
    println!("Updated:     {}", format_timestamp(&snippet.updated_at));
    print_separator(60);
    println!("{}", snippet.code);
}
