//! Schema migrations for the users, posts, and likes tables

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Create all tables and indexes. Safe to run on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
