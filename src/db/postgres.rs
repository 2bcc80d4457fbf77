// src/db/postgres.rs
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use super::{DatabaseBackend, DbError};

#[derive(Debug, Clone)]
pub struct PostgresBackend {
    pool: Option<PgPool>,
}

impl PostgresBackend {
    pub fn new() -> Self {
        Self { pool: None }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&PgPool, DbError> {
        self.pool
            .as_ref()
            .ok_or(DbError::InitError("Database not initialized".into()))
    }
}

impl DatabaseBackend for PostgresBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        log::info!("Initializing PostgreSQL database...");

        // Create a connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        log::info!("Connected to PostgreSQL");

        // Ensure the gen_random_uuid function exists (for PostgreSQL versions < 13)
        let result = sqlx::query("SELECT gen_random_uuid();")
            .fetch_optional(&pool)
            .await;

        if let Err(e) = result {
            log::warn!("gen_random_uuid() function not available: {}", e);
            sqlx::query("CREATE EXTENSION IF NOT EXISTS pgcrypto;")
                .execute(&pool)
                .await?;
        }

        // Create the users table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                username TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
            );
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);")
            .execute(&pool)
            .await?;

        self.pool = Some(pool);
        Ok(())
    }

    async fn save_record(&self, username: &str, password: &str) -> Result<Uuid, DbError> {
        let pool = self.get_pool()?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(pool)
        .await?;

        let id: Uuid = row.get("id");
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
