//! User repository
//!
//! - create: plain INSERT, duplicate email surfaces as Conflict
//! - get / find_by_email: single-row lookups

use sqlx::{FromRow, SqlitePool};

use super::{is_unique_violation, DbError};
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    ///
    /// The UNIQUE constraint on `email` is the only duplicate check.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES (?, ?)
            RETURNING id, name, email
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::Conflict {
                    reason: "email already registered",
                }
            } else {
                DbError::Sqlx(e)
            }
        })
    }

    /// Load a user by id, if present.
    pub async fn find(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Load a user by id or fail with NotFound.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        self.find(id)
            .await?
            .ok_or_else(|| DbError::not_found("User", id))
    }

    /// Exact-match lookup by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }
}
