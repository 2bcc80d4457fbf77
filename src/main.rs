use clap::Parser;
use std::io;
use std::path::Path;

mod api;
mod cli;
mod core;
mod db;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }
    if let Some(address) = args.api_address {
        config.web_address = address;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_target(true)
        .init();

    log::info!("Starting Passforge - Password Generator");

    let db_url = args.db.unwrap_or_else(|| config.get_database_url());
    let db = match db::init_db(&db_url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database connection failed: {e}");
            eprintln!("Troubleshooting:");
            eprintln!("• Is your DB server running?");
            eprintln!("• Are credentials correct?");
            eprintln!("• For SQLite: does the path exist?");
            eprintln!("• For Postgres: create the DB if needed: `createdb passforge -U postgres`");
            eprintln!("• Use --db or set DATABASE_URL in `.env`");
            return Ok(());
        }
    };
    log::info!("Connected to {} backend", db.get_backend_type());

    // One-shot CLI generation
    if let Some(command) = args.command {
        return cli::handlers::run_command(command, &db, &config)
            .await
            .map_err(|e| {
                log::error!("Command failed: {}", e);
                eprintln!("Error: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            });
    }

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received. Shutting down.");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    println!(
        "🚀 Passforge running on http://{}:{}",
        config.web_address, config.web_port
    );
    api::start_server(db, config).await
}
