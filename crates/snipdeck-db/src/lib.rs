//! `SQLite` adapters for the snipdeck store ports.
//!
//! Implements `SnippetRepository`, `CategoryRepository` and `TagRepository`
//! from `snipdeck-core` on top of a `sqlx` `SqlitePool`. The pool never
//! appears in a port signature; adapters obtain trait objects through
//! [`CoreFactory::build_repos`].
//!
//! ```rust,no_run
//! use snipdeck_db::{CoreFactory, setup_database};
//! use snipdeck_core::Settings;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = setup_database(Path::new("/tmp/snipdeck.db")).await?;
//! let core = CoreFactory::build_app_core(pool, &Settings::with_defaults())?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

// Linked for its bundled SQLite build only.
use libsqlite3_sys as _;

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::{SqliteCategoryRepository, SqliteSnippetRepository, SqliteTagRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
