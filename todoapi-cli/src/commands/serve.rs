//! HTTP server command
//!
//! Resolves settings (flag > environment > config file > default), opens the
//! todo store and runs the server until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use todoapi_core::TodoConfig;
use todoapi_server::{run_server, ServerConfig, TodoStore};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "TODOAPI_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (default: ./todos.db)
    #[arg(long, env = "TODOAPI_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "TODOAPI_CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, env = "TODOAPI_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Overlay these arguments on the file configuration.
    fn resolve(self, file: TodoConfig) -> (ServerConfig, PathBuf) {
        let server = ServerConfig {
            bind_addr: self.bind.unwrap_or(file.server.bind),
            cors_permissive: self.cors_permissive || file.server.cors_permissive,
            request_timeout: Duration::from_secs(
                self.timeout.unwrap_or(file.server.timeout_secs),
            ),
        };
        let db_path = self.db_path.unwrap_or(file.database.path);
        (server, db_path)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file_config: TodoConfig) -> Result<()> {
    let (config, db_path) = args.resolve(file_config);

    tracing::info!("Starting todoapi server on {}", config.bind_addr);

    let store = TodoStore::open(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
