// src/db/sqlite.rs
use chrono::Utc;
use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions},
    Row,
};
use std::path::Path;
use uuid::Uuid;

use super::{DatabaseBackend, DbError};

#[derive(Debug, Clone)]
pub struct SqliteBackend {
    pool: Option<SqlitePool>,
}

impl SqliteBackend {
    pub fn new() -> Self {
        Self { pool: None }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&SqlitePool, DbError> {
        self.pool
            .as_ref()
            .ok_or(DbError::InitError("Database not initialized".into()))
    }
}

impl DatabaseBackend for SqliteBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        // Parse the SQLite connection string
        let db_path = if connection_string.starts_with("sqlite:") {
            &connection_string[7..]
        } else {
            return Err(DbError::ConfigError("Invalid SQLite connection string".into()));
        };

        // Create the database directory if it doesn't exist (in-memory needs none)
        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DbError::InitError(format!("Failed to create database directory: {}", e))
                    })?;
                }
            }
        }

        log::info!("Initializing SQLite database at: {}", db_path);

        // Create a connection pool. An in-memory database exists per
        // connection, so it gets a single-connection pool.
        let pool = if db_path == ":memory:" {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect(&format!("sqlite:{}?mode=rwc", db_path))
                .await?
        };

        // Create the users table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await?;

        self.pool = Some(pool);
        Ok(())
    }

    async fn save_record(&self, username: &str, password: &str) -> Result<Uuid, DbError> {
        let pool = self.get_pool()?;

        let id = Uuid::new_v4();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(username)
        .bind(password)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(id)
    }

    async fn count_records(&self) -> Result<usize, DbError> {
        let pool = self.get_pool()?;

        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(pool)
            .await?;

        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_sqlite_connection_strings() {
        let mut backend = SqliteBackend::new();
        let err = backend.init("postgres://localhost/passforge").await.unwrap_err();
        assert!(matches!(err, DbError::ConfigError(_)));
    }

    #[tokio::test]
    async fn save_fails_once_pool_is_closed() {
        // Simulated storage outage: the caller gets an error, not a panic.
        let mut backend = SqliteBackend::new();
        backend.init("sqlite::memory:").await.unwrap();

        backend.pool.as_ref().unwrap().close().await;

        let result = backend.save_record("carol", "p4ss#word").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn uninitialized_backend_reports_init_error() {
        let backend = SqliteBackend::new();
        let err = backend.save_record("dave", "x9!yZ").await.unwrap_err();
        assert!(matches!(err, DbError::InitError(_)));
    }
}
