//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use pupfeed_server::db::{create_pool_with_options, migrations};

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the users, posts, and likes tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.db.database_url, args.db.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.db.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to apply schema")?;

    pool.close().await;
    println!("Schema ready at {}", args.db.database_url);
    Ok(())
}
