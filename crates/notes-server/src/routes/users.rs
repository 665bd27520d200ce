//! User routes: registration and listing.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use notes_core::{NewUser, User, ValidationError};
use notes_store::StoreError;

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for POST /api/users.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// POST /api/users
async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let password = request
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("password missing".to_string()))?;

    if request.username.is_empty() {
        return Err(StoreError::from(ValidationError::required("User", "username")).into());
    }

    // Checked before hashing; the store's unique constraint still guards races.
    if state
        .users()
        .get_user_by_username(&request.username)
        .await?
        .is_some()
    {
        return Err(StoreError::from(ValidationError::unique(
            "User",
            "username",
            &request.username,
        ))
        .into());
    }

    let password_hash = auth::hash_password(password).await?;

    let user = state
        .users()
        .insert_user(NewUser {
            username: request.username,
            name: request.name,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users().list_users().await?;
    Ok(Json(users))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}
