//! Post endpoints: create, detail, like

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::repos::{LikeOutcome, LikeRepo, Post, PostRepo, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{NewPost, ValidationError};

/// Create post request
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub user_id: Option<i64>,
    pub image_url: Option<String>,
    pub text_content: Option<String>,
}

/// Like request
#[derive(Deserialize)]
pub struct LikeRequest {
    pub user_id: Option<i64>,
}

/// Full post representation
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post_id: i64,
    pub user_id: i64,
    pub image_url: String,
    pub text_content: Option<String>,
    pub date: String,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            post_id: p.id,
            user_id: p.user_id,
            image_url: p.image_url,
            text_content: p.text_content,
            date: p.date.to_rfc3339(),
        }
    }
}

/// Post as it appears in feed and list responses (owner omitted)
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub post_id: i64,
    pub image_url: String,
    pub text_content: Option<String>,
    pub date: String,
}

impl From<Post> for PostSummary {
    fn from(p: Post) -> Self {
        Self {
            post_id: p.id,
            image_url: p.image_url,
            text_content: p.text_content,
            date: p.date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /posts - create a post for an existing user
async fn create_post(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let new_post = NewPost::new(req.user_id, req.image_url.as_deref(), req.text_content)?;
    let post = PostRepo::new(&state.pool)
        .create(&new_post, Utc::now())
        .await?;

    tracing::info!(post_id = post.id, user_id = post.user_id, "post created");
    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// GET /posts/{post_id} - get a single post
async fn get_post(
    State(state): State<Arc<AppState>>,
    ValidId(post_id): ValidId,
) -> Result<Json<PostResponse>, ApiError> {
    let post = PostRepo::new(&state.pool).get(post_id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// POST /posts/{post_id}/like - like a post once per user
async fn like_post(
    State(state): State<Arc<AppState>>,
    ValidId(post_id): ValidId,
    JsonBody(req): JsonBody<LikeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = req.user_id.ok_or(ValidationError::Required {
        fields: &["user_id"],
    })?;

    PostRepo::new(&state.pool).get(post_id).await?;
    UserRepo::new(&state.pool).get(user_id).await?;

    let message = match LikeRepo::new(&state.pool).create(user_id, post_id).await? {
        LikeOutcome::Created(like) => {
            tracing::info!(like_id = like.id, user_id, post_id, "post liked");
            "Post liked successfully"
        }
        LikeOutcome::AlreadyLiked => {
            tracing::debug!(user_id, post_id, "like already recorded");
            "Post already liked"
        }
    };

    Ok(Json(MessageResponse { message }))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{post_id}", get(get_post))
        .route("/posts/{post_id}/like", post(like_post))
}
