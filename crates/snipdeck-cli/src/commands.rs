//! Main commands enum and subcommand groups.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use snipdeck_core::{SortBy, SortDirection};

/// Where component source is read from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// File containing the component source (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Available commands for the snippet gallery.
#[derive(Subcommand)]
pub enum Commands {
    /// Check component source without storing it
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the normalized form of component source
    Normalize {
        #[command(flatten)]
        source: SourceArgs,
        /// Print the editor sandbox manifest instead of the code
        #[arg(long)]
        manifest: bool,
    },

    /// Submit a new snippet
    Add {
        /// Display name for the snippet
        name: String,
        /// File containing the component source (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: Option<String>,
        /// Tag ID (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List snippets, optionally filtered and sorted
    List {
        /// Case-insensitive text matched against name, description and author
        #[arg(short, long)]
        search: Option<String>,
        /// Only snippets in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Only snippets carrying this tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Only snippets by this author (repeatable)
        #[arg(long = "author")]
        authors: Vec<String>,
        /// Sort key: updatedAt, createdAt, name, author
        #[arg(long, default_value_t = SortBy::UpdatedAt)]
        sort_by: SortBy,
        /// Sort direction: asc or desc
        #[arg(long, default_value_t = SortDirection::Desc)]
        direction: SortDirection,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the authors, categories and tags currently in use
    Filters,

    /// Show a snippet with its code
    Show {
        /// Snippet ID
        id: String,
    },

    /// Print the public sandbox manifest and view URL for a snippet
    View {
        /// Snippet ID
        id: String,
        /// Print only the public URL
        #[arg(long)]
        url_only: bool,
    },

    /// Edit a snippet (author or admin only)
    Update {
        /// Snippet ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
        /// File containing replacement component source
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// New category ID
        #[arg(short, long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Remove the category
        #[arg(long)]
        clear_category: bool,
        /// Replacement tag ID (repeatable)
        #[arg(short, long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        /// Remove every tag
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete a snippet (author or admin only)
    Remove {
        /// Snippet ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage tags
    #[command(subcommand)]
    Tag(TagCommand),
}

/// Category management subcommands.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List,
    /// Create a category
    Add {
        name: String,
        /// Display color, e.g. "#ef4444"
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Rename or recolor a category
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a category; snippets keep the dangling ID
    Remove { id: String },
}

/// Tag management subcommands.
#[derive(Subcommand)]
pub enum TagCommand {
    /// List all tags
    List,
    /// Create a tag
    Add {
        name: String,
        /// Reuse an existing tag with the same name instead of creating one
        #[arg(long)]
        reuse: bool,
    },
    /// Delete a tag; snippets keep the dangling ID
    Remove { id: String },
}
