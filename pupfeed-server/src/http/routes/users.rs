//! User endpoints: registration, login, profile, and per-user post lists

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::posts::PostSummary;
use crate::db::repos::{Post, PostRepo, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{LoginEmail, NewUser};

/// Registration request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            user_id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub access_token: String,
}

/// Opaque per-login token. Not persisted and not checked by any route.
fn issue_access_token() -> String {
    Uuid::new_v4().simple().to_string()
}

fn summaries(posts: Vec<Post>) -> Json<Vec<PostSummary>> {
    Json(posts.into_iter().map(PostSummary::from).collect())
}

/// POST /users - register a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let new_user = NewUser::new(req.name.as_deref(), req.email.as_deref())?;
    let user = UserRepo::new(&state.pool).create(&new_user).await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /users/login - look a user up by email
async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = LoginEmail::new(req.email.as_deref())?;
    let user = UserRepo::new(&state.pool)
        .find_by_email(email.as_str())
        .await?
        .ok_or(ApiError::NotFound { resource: "User" })?;

    tracing::info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        user: UserResponse::from(user),
        access_token: issue_access_token(),
    }))
}

/// GET /users/{user_id}/profile
async fn profile(
    State(state): State<Arc<AppState>>,
    ValidId(user_id): ValidId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{user_id}/feed - own posts, newest first
async fn feed(
    State(state): State<Arc<AppState>>,
    ValidId(user_id): ValidId,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    let posts = PostRepo::new(&state.pool).feed(user_id).await?;
    Ok(summaries(posts))
}

/// GET /users/{user_id}/liked-posts
async fn liked_posts(
    State(state): State<Arc<AppState>>,
    ValidId(user_id): ValidId,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    let posts = PostRepo::new(&state.pool).list_liked_by(user_id).await?;
    Ok(summaries(posts))
}

/// GET /users/{user_id}/posts
async fn authored_posts(
    State(state): State<Arc<AppState>>,
    ValidId(user_id): ValidId,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    let posts = PostRepo::new(&state.pool).list_by_author(user_id).await?;
    Ok(summaries(posts))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/login", post(login))
        .route("/users/{user_id}/profile", get(profile))
        .route("/users/{user_id}/feed", get(feed))
        .route("/users/{user_id}/liked-posts", get(liked_posts))
        .route("/users/{user_id}/posts", get(authored_posts))
}
