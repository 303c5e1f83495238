//! Platform data-root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "LEMON_DATA_DIR";

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "little-lemon";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `LEMON_DATA_DIR` environment variable
/// 2. System local data directory (e.g., `~/.local/share/little-lemon`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join(APP_DIR_NAME),
    };

    ensure_dir(&root)?;
    Ok(root)
}

fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
