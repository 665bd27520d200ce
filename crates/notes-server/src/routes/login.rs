//! Login: exchange credentials for a bearer token.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "invalid username or password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .users()
        .get_user_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !auth::verify_password(request.password, user.password_hash.clone()).await? {
        tracing::debug!(username = %user.username, "Login rejected");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let config = state.config();
    let token = auth::create_token(&user, &config.jwt_secret, config.token_expiry_hours)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

/// Build login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}
