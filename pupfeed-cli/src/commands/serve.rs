//! HTTP server command
//!
//! Opens the database, applies the schema, and serves the API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use pupfeed_server::db::create_pool_with_options;
use pupfeed_server::{run_server, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PUPFEED_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.db.database_url, "Starting pupfeed server on {}", args.bind);

    let pool = create_pool_with_options(&args.db.database_url, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
