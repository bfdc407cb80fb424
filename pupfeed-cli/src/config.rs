//! Configuration sources for the pupfeed CLI
//!
//! Precedence (highest first): command-line flags, environment variables,
//! `./.env`, `~/.pupfeed/.env`, built-in defaults.

use std::path::PathBuf;

use clap::Args;
use pupfeed_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use tracing::{debug, info};

/// Database used when neither `--database-url` nor `DATABASE_URL` is set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pupfeed.db";

/// Database connection arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL, e.g. sqlite://pupfeed.db or sqlite::memory:
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "PUPFEED_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Get the pupfeed config directory path (~/.pupfeed)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pupfeed"))
}

/// Load environment variables from .env files, returning the files read.
///
/// dotenvy never overwrites variables that are already set, so loading the
/// current directory first gives it priority over ~/.pupfeed/.env. Runs
/// before tracing is initialized, so callers log the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// Report which .env files contributed configuration.
pub fn log_dotenv_sources(sources: &[PathBuf]) {
    if sources.is_empty() {
        debug!("No .env files found (current dir or ~/.pupfeed)");
        return;
    }

    let sources: Vec<String> = sources.iter().map(|p| p.display().to_string()).collect();
    info!("Loaded configuration from: {}", sources.join(", "));
}
