//! Lutris `pga.db` reader.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::error::LibraryError;

/// Read-only handle to a Lutris game library database.
pub struct Library {
    pool: Pool<Sqlite>,
}

impl Library {
    /// Opens the database file read-only.
    ///
    /// Fails with [`LibraryError::Unavailable`] if the file is missing,
    /// not a SQLite database, or has no readable `games` table.
    pub async fn open(path: &Path) -> Result<Self, LibraryError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=ro", path.display()))
            .map_err(|e| LibraryError::Unavailable(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| LibraryError::Unavailable(format!("{}: {e}", path.display())))?;

        // SQLite defers reading most of the file until the first query, so
        // probe the games table here: a corrupt or foreign file must fail
        // at open, not mid-run.
        sqlx::query("SELECT slug FROM games LIMIT 1")
            .fetch_optional(&pool)
            .await
            .map_err(|e| LibraryError::Unavailable(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), "library database opened");
        Ok(Self { pool })
    }

    /// Returns every game slug in table order.
    ///
    /// An empty library is valid and yields an empty vector.
    pub async fn game_slugs(&self) -> Result<Vec<String>, LibraryError> {
        let slugs = sqlx::query_scalar::<_, String>("SELECT slug FROM games")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LibraryError::Query(e.to_string()))?;
        Ok(slugs)
    }

    /// Closes the underlying connection pool.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
