// src/db/mod.rs
use thiserror::Error;
use uuid::Uuid;

pub mod postgres;
pub mod sqlite;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

// Convert database-specific errors to our DbError
impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        DbError::SqlxError(error.to_string())
    }
}

// Database backend trait - to be implemented by each database type
pub trait DatabaseBackend: Send + Sync {
    // Initialize the database connection
    async fn init(&mut self, connection_string: &str) -> Result<(), DbError>;

    // Persist a username/password pair, returning the new record id
    async fn save_record(&self, username: &str, password: &str) -> Result<Uuid, DbError>;

    async fn count_records(&self) -> Result<usize, DbError>;
}

// Enum to hold specific backend implementations
#[derive(Debug, Clone)]
pub enum DatabaseType {
    Postgres(postgres::PostgresBackend),
    Sqlite(sqlite::SqliteBackend),
}

// The main database struct that uses the enum pattern instead of trait objects
#[derive(Clone)]
pub struct Database {
    pub backend: DatabaseType,
}

impl Database {
    // Create a new database connection, auto-detecting the best backend
    pub async fn new(connection_string: &str) -> Result<Self, DbError> {
        if connection_string.starts_with("sqlite:") {
            // Use SQLite backend
            let mut backend = sqlite::SqliteBackend::new();
            backend.init(connection_string).await?;
            Ok(Self {
                backend: DatabaseType::Sqlite(backend),
            })
        } else {
            // Default to PostgreSQL
            let mut backend = postgres::PostgresBackend::new();
            match backend.init(connection_string).await {
                Ok(_) => Ok(Self {
                    backend: DatabaseType::Postgres(backend),
                }),
                Err(e) => {
                    // If PostgreSQL fails, try SQLite as fallback
                    log::warn!("PostgreSQL connection failed: {}. Falling back to SQLite.", e);
                    let mut sqlite_backend = sqlite::SqliteBackend::new();
                    sqlite_backend.init("sqlite:passforge.db").await?;
                    Ok(Self {
                        backend: DatabaseType::Sqlite(sqlite_backend),
                    })
                }
            }
        }
    }

    pub async fn save_record(&self, username: &str, password: &str) -> Result<Uuid, DbError> {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.save_record(username, password).await,
            DatabaseType::Sqlite(backend) => backend.save_record(username, password).await,
        }
    }

    pub async fn count_records(&self) -> Result<usize, DbError> {
        match &self.backend {
            DatabaseType::Postgres(backend) => backend.count_records().await,
            DatabaseType::Sqlite(backend) => backend.count_records().await,
        }
    }

    pub fn get_backend_type(&self) -> &str {
        match &self.backend {
            DatabaseType::Sqlite(_) => "SQLite",
            DatabaseType::Postgres(_) => "PostgreSQL",
        }
    }
}

// Function to initialize the database
pub async fn init_db(db_url: &str) -> Result<Database, DbError> {
    Database::new(db_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_record_returns_identifier() {
        let db = init_db("sqlite::memory:").await.unwrap();

        let id = db.save_record("alice", "S3cr3t!pass").await.unwrap();
        assert!(!id.is_nil());
    }

    #[tokio::test]
    async fn count_tracks_saved_records() {
        let db = init_db("sqlite::memory:").await.unwrap();
        assert_eq!(db.count_records().await.unwrap(), 0);

        db.save_record("alice", "S3cr3t!pass").await.unwrap();
        db.save_record("alice", "An0ther&one").await.unwrap();
        assert_eq!(db.count_records().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_usernames_are_allowed() {
        // No uniqueness constraint on username in the storage contract.
        let db = init_db("sqlite::memory:").await.unwrap();

        let first = db.save_record("bob", "one!1AA").await.unwrap();
        let second = db.save_record("bob", "two@2BB").await.unwrap();
        assert_ne!(first, second);
    }
}
