//! Database path resolution.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the snipdeck `SQLite` database.
pub const DATABASE_FILE_NAME: &str = "snipdeck.db";

/// Get the path to the snipdeck database file under the data root.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Get the database path under an explicit root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_ends_with_snipdeck_db() {
        let root = tempfile::tempdir().unwrap();
        let path = database_path_in(root.path()).unwrap();
        assert!(path.to_string_lossy().ends_with(DATABASE_FILE_NAME));
        assert!(root.path().join("data").is_dir());
    }
}
