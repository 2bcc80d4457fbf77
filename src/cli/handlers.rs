// src/cli/handlers.rs
use anyhow::Result;

use super::commands::CliCommand;
use crate::core::config::Config;
use crate::db::Database;
use crate::generators;
use crate::models::RequiredChars;

/// Execute a one-shot generation command: generate, print, optionally save.
/// A storage failure is reported but does not fail the command.
pub async fn run_command(command: CliCommand, db: &Database, config: &Config) -> Result<()> {
    let default_length = config.default_password_length as u16;

    let (password, username) = match command {
        CliCommand::Simple { length, username } => {
            let length = length.unwrap_or(default_length);
            (generators::generate_simple(length as usize), username)
        }
        CliCommand::Selective {
            length,
            uppercase,
            lowercase,
            digits,
            special,
            username,
        } => {
            let length = length.unwrap_or(default_length);
            let password = generators::generate_selective(
                length as usize,
                uppercase,
                lowercase,
                digits,
                special,
            )?;
            (password, username)
        }
        CliCommand::Required {
            length,
            uppercase,
            lowercase,
            digits,
            special,
            username,
        } => {
            let length = length.unwrap_or(default_length);
            let required = RequiredChars {
                uppercase,
                lowercase,
                digits,
                special,
            };
            (generators::generate_required(length as usize, &required)?, username)
        }
    };

    println!("Generated password: {}", password);

    if let Some(username) = username.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        match db.save_record(username, &password).await {
            Ok(id) => println!("User saved with ID: {}", id),
            Err(e) => {
                log::error!("Failed to save user '{}': {}", username, e);
                eprintln!("Failed to save user record.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{sqlite::SqliteBackend, DatabaseType};

    #[tokio::test]
    async fn storage_failure_does_not_fail_the_command() {
        // Uninitialized backend: every save errors, the command still succeeds.
        let db = Database {
            backend: DatabaseType::Sqlite(SqliteBackend::new()),
        };

        let command = CliCommand::Simple {
            length: Some(12),
            username: Some("alice".to_string()),
        };

        let result = run_command(command, &db, &Config::default()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn invalid_selection_propagates_the_error() {
        let db = crate::db::init_db("sqlite::memory:").await.unwrap();

        let command = CliCommand::Selective {
            length: Some(8),
            uppercase: false,
            lowercase: false,
            digits: false,
            special: false,
            username: None,
        };

        let err = run_command(command, &db, &Config::default()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one character type must be selected"
        );
    }
}
