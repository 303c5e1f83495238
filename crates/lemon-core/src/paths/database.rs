//! Database path resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the local menu database.
pub const DATABASE_FILE_NAME: &str = "little_lemon.db";

/// Get the path to the local database file.
///
/// Returns `little_lemon.db` inside the data root, creating the root if
/// needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE_NAME))
}
