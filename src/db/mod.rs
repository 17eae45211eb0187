//! Database module for Skillshelf.
//!
//! Owns the connection pool and applies the idempotent schema setup. The
//! `Database` value is constructed once at startup and shared with request
//! handlers; individual queries borrow connections from the pool, so requests
//! never serialize on a single reserved connection.

mod schema;

pub use schema::SCHEMA;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::{Result, ShelfError};

/// Database wrapper managing the connection pool and schema setup.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the configured database and ensure the schema exists.
    ///
    /// The database file is created if missing. Fails with
    /// [`ShelfError::Connection`] when the URL is malformed or the store is
    /// unreachable, and with [`ShelfError::Schema`] when table setup is
    /// rejected.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database");

        // The driver creates a missing database file but not its directory
        if let Some(path) = config
            .url
            .strip_prefix("sqlite://")
            .or_else(|| config.url.strip_prefix("sqlite:"))
        {
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| ShelfError::Connection(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| ShelfError::Connection(e.to_string()))?;

        let db = Self { pool };
        db.ensure_schema().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    pub async fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");

        // A single long-lived connection: each pooled connection would
        // otherwise get its own private in-memory database.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| ShelfError::Connection(e.to_string()))?;

        let db = Self { pool };
        db.ensure_schema().await?;

        Ok(db)
    }

    /// Apply the idempotent schema setup script.
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| ShelfError::Schema(e.to_string()))?;
        debug!("Schema setup complete");
        Ok(())
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?)",
        )
        .bind(table_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.table_exists("content_items").await.unwrap());
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
        assert!(db.table_exists("content_items").await.unwrap());
    }

    #[tokio::test]
    async fn test_content_items_columns() {
        let db = Database::open_in_memory().await.unwrap();

        // Selecting every expected column fails if any is missing
        let result = sqlx::query(
            "SELECT id, title, description, category, language, provider, role,
                    file_name, file_type, file_data, created_at
             FROM content_items LIMIT 0",
        )
        .fetch_optional(db.pool())
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_created_at_index_exists() {
        let db = Database::open_in_memory().await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='index' AND name='idx_content_items_created_at'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_connect_creates_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        };

        {
            let db = Database::connect(&config).await.unwrap();
            assert!(db.table_exists("content_items").await.unwrap());
        }

        // Reopen: schema setup must not fail on an existing table
        let db = Database::connect(&config).await.unwrap();
        assert!(db.table_exists("content_items").await.unwrap());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = DatabaseConfig {
            url: "not-a-database-url".to_string(),
            max_connections: 1,
        };
        let result = Database::connect(&config).await;
        assert!(matches!(result, Err(ShelfError::Connection(_))));
    }
}
