//! Path utilities for snipdeck data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O
//! - OS-specific logic is kept private in `platform`

mod database;
mod error;
mod platform;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path};

// Database
pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
