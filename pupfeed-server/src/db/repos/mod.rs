//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Lookups by id return `DbError::NotFound` when the row is absent
//! - Uniqueness is enforced by the schema; violations map to `DbError::Conflict`
//! - Writes are single statements; foreign keys reject dangling references

pub mod users;
pub mod posts;
pub mod likes;

pub use users::{User, UserRepo};
pub use posts::{Post, PostRepo};
pub use likes::{Like, LikeOutcome, LikeRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {reason}")]
    Conflict { reason: &'static str },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
