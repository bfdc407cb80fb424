//! Like repository
//!
//! The (user_id, post_id) UNIQUE constraint is the duplicate check;
//! a second like for the same pair inserts nothing.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Like record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
}

/// Result of a like attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    Created(Like),
    AlreadyLiked,
}

/// Like repository
pub struct LikeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LikeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record that `user_id` likes `post_id`.
    ///
    /// Idempotent: `ON CONFLICT DO NOTHING` returns no row for an
    /// existing pair, which maps to `AlreadyLiked`.
    pub async fn create(&self, user_id: i64, post_id: i64) -> Result<LikeOutcome, DbError> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (user_id, post_id)
            VALUES (?, ?)
            ON CONFLICT (user_id, post_id) DO NOTHING
            RETURNING id, user_id, post_id
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(match like {
            Some(like) => LikeOutcome::Created(like),
            None => LikeOutcome::AlreadyLiked,
        })
    }

    #[cfg(test)]
    pub(crate) async fn count_for_post(&self, post_id: i64) -> Result<i64, DbError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
