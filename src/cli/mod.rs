// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database URL (overrides DATABASE_URL / DATABASE_TYPE from the environment)
    #[arg(long, short)]
    pub db: Option<String>,

    /// Command to execute (starts the web server when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// API server bind address
    #[arg(long)]
    pub api_address: Option<String>,
}
