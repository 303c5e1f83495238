//! Database setup and initialization.
//!
//! This module provides `setup_database()` for opening the `SQLite` file and
//! applying the full schema. Entry points call this with the resolved
//! database path.

use std::path::Path;

use lemon_core::RepositoryError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::debug;

/// Opens (creating if missing) the `SQLite` database and ensures the schema exists.
///
/// The file uses WAL journaling, so readers keep seeing the last committed
/// menu while a replacement transaction is in progress.
///
/// # Errors
///
/// Returns `RepositoryError::Init` if:
/// - The parent directory cannot be created
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use lemon_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), lemon_core::RepositoryError> {
/// let pool = setup_database(Path::new("/path/to/little_lemon.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool, RepositoryError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            RepositoryError::Init(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal),
    )
    .await
    .map_err(init_error)?;

    create_schema(&pool).await?;
    debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database with the full schema.
///
/// The pool is pinned to one long-lived connection: every new connection
/// to `sqlite::memory:` would otherwise see its own empty database.
pub async fn setup_memory_database() -> Result<SqlitePool, RepositoryError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(init_error)?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    create_menu_schema(pool).await?;
    create_profile_schema(pool).await?;
    Ok(())
}

/// Creates the `menu` table and its indexes.
pub(crate) async fn create_menu_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT,
            image TEXT,
            category TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(init_error)?;

    // Index on name for ordering and LIKE scans
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_menu_name ON menu(name)")
        .execute(pool)
        .await
        .map_err(init_error)?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_menu_category ON menu(category)")
        .execute(pool)
        .await
        .map_err(init_error)?;

    Ok(())
}

/// Creates the key-value table holding the user profile.
pub(crate) async fn create_profile_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profile_kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(init_error)?;

    Ok(())
}

fn init_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Init(e.to_string())
}
