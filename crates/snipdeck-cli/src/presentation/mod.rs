//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod snippet_display;
pub mod tables;

// Re-export commonly used items
pub use snippet_display::{format_timestamp, print_snippet_detail, print_snippet_table};
pub use tables::{format_optional, print_separator, truncate_string};
