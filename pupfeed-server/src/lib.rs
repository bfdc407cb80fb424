//! pupfeed-server: HTTP backend for a small photo-sharing feed
//!
//! Users register, publish image posts, like each other's posts, and
//! read feeds and profiles. State lives in SQLite behind a sqlx pool
//! that is created by the caller and handed to [`build_router`] or
//! [`run_server`].

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
