//! Post repository
//!
//! Handles post creation and the per-user listings:
//! - create: one insert, owner enforced by the foreign key
//! - feed: newest first
//! - authored / liked: insertion order

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::{is_foreign_key_violation, DbError};
use crate::models::NewPost;

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub image_url: String,
    pub text_content: Option<String>,
    pub date: DateTime<Utc>,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post owned by `post.user_id()`, stamped with `date`.
    ///
    /// A single INSERT; the users foreign key rejects an unknown owner,
    /// which maps to NotFound.
    pub async fn create(&self, post: &NewPost, date: DateTime<Utc>) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, image_url, text_content, date)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, image_url, text_content, date
            "#,
        )
        .bind(post.user_id())
        .bind(post.image_url())
        .bind(post.text_content())
        .bind(date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DbError::not_found("User", post.user_id())
            } else {
                e.into()
            }
        })
    }

    /// Get a single post by id.
    pub async fn get(&self, id: i64) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, image_url, text_content, date
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Post", id))
    }

    /// A user's own posts, newest first. Equal timestamps fall back to id.
    pub async fn feed(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, image_url, text_content, date
            FROM posts
            WHERE user_id = ?
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// A user's own posts in creation order.
    pub async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, image_url, text_content, date
            FROM posts
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Posts the user has liked, in the order the likes were made.
    pub async fn list_liked_by(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.user_id, p.image_url, p.text_content, p.date
            FROM likes l
            JOIN posts p ON p.id = l.post_id
            WHERE l.user_id = ?
            ORDER BY l.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::db::repos::test_support;
    use crate::db::{LikeRepo, UserRepo};
    use crate::models::NewUser;

    async fn user(pool: &SqlitePool, email: &str) -> i64 {
        UserRepo::new(pool)
            .create(&NewUser::new(Some("Rex"), Some(email)).unwrap())
            .await
            .unwrap()
            .id
    }

    fn new_post(user_id: i64, image: &str) -> NewPost {
        NewPost::new(Some(user_id), Some(image), Some(format!("caption for {image}"))).unwrap()
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let pool = test_support::pool().await;
        let owner = user(&pool, "rex@example.com").await;
        let repo = PostRepo::new(&pool);

        let created = repo.create(&new_post(owner, "a.jpg"), Utc::now()).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.user_id, owner);
    }

    #[tokio::test]
    async fn create_for_missing_user_is_not_found() {
        let pool = test_support::pool().await;
        let err = PostRepo::new(&pool)
            .create(&new_post(99, "a.jpg"), Utc::now())
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "User", .. }));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn feed_is_newest_first() {
        let pool = test_support::pool().await;
        let owner = user(&pool, "rex@example.com").await;
        let repo = PostRepo::new(&pool);
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        // Insert out of chronological order so id order != date order
        let p2 = repo.create(&new_post(owner, "2.jpg"), t1 + Duration::minutes(1)).await.unwrap();
        let p1 = repo.create(&new_post(owner, "1.jpg"), t1).await.unwrap();
        let p3 = repo.create(&new_post(owner, "3.jpg"), t1 + Duration::minutes(2)).await.unwrap();

        let ids: Vec<i64> = repo.feed(owner).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![p3.id, p2.id, p1.id]);
    }

    #[tokio::test]
    async fn feed_only_contains_own_posts() {
        let pool = test_support::pool().await;
        let a = user(&pool, "a@example.com").await;
        let b = user(&pool, "b@example.com").await;
        let repo = PostRepo::new(&pool);

        repo.create(&new_post(a, "a.jpg"), Utc::now()).await.unwrap();
        repo.create(&new_post(b, "b.jpg"), Utc::now()).await.unwrap();

        let feed = repo.feed(a).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].user_id, a);
    }

    #[tokio::test]
    async fn liked_posts_follow_like_order() {
        let pool = test_support::pool().await;
        let author = user(&pool, "author@example.com").await;
        let fan = user(&pool, "fan@example.com").await;
        let repo = PostRepo::new(&pool);

        let first = repo.create(&new_post(author, "1.jpg"), Utc::now()).await.unwrap();
        let second = repo.create(&new_post(author, "2.jpg"), Utc::now()).await.unwrap();

        let likes = LikeRepo::new(&pool);
        likes.create(fan, second.id).await.unwrap();
        likes.create(fan, first.id).await.unwrap();

        let ids: Vec<i64> = repo.list_liked_by(fan).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert!(repo.list_liked_by(author).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_posts_is_empty_list() {
        let pool = test_support::pool().await;
        let owner = user(&pool, "rex@example.com").await;

        assert!(PostRepo::new(&pool).list_by_author(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_on_file_database_all_succeed() {
        let (_dir, pool) = test_support::file_pool().await;
        let owner = user(&pool, "rex@example.com").await;

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    PostRepo::new(&pool)
                        .create(&new_post(owner, &format!("{i}.jpg")), Utc::now())
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().expect("concurrent create failed");
        }

        assert_eq!(PostRepo::new(&pool).list_by_author(owner).await.unwrap().len(), 100);
    }
}
