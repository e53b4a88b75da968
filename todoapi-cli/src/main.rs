//! todoapi - HTTP CRUD API for todo items backed by SQLite

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todoapi_core::TodoConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "todoapi",
    author,
    version,
    about = "A small JSON API for managing todo items in a SQLite file"
)]
struct Cli {
    /// Config file (default: ~/.todoapi/config.toml)
    #[arg(long, global = true, env = "TODOAPI_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Inspect todoapi configuration
    Config(commands::config::ConfigArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<TodoConfig> {
    let config = match path {
        Some(path) => TodoConfig::load_from(path),
        None => TodoConfig::load(),
    };
    config.context("Failed to load configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Config(args) => commands::run_config(args, &config)?,
    }
    Ok(())
}
