//! Request extractors: JSON bodies with JSON errors, and the optional
//! bearer-token identity used when creating notes.

use axum::{
    RequestPartsExt,
    extract::{FromRequest, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use notes_core::RecordId;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// `Json` whose rejections render as `{ "error": ... }` with status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// User identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct TokenUser {
    pub user_id: RecordId,
    pub username: String,
}

/// Identity from `Authorization: Bearer <token>`, if the header is present.
///
/// - No header: `MaybeTokenUser(None)`.
/// - Header present but not a bearer token, bad signature, expired, or for a
///   user that no longer exists: `401`.
#[derive(Debug, Clone)]
pub struct MaybeTokenUser(pub Option<TokenUser>);

impl FromRequestParts<AppState> for MaybeTokenUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(Self(None));
        }

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                ApiError::Unauthorized("Authorization header must be Bearer <token>".to_string())
            })?;

        let claims = auth::validate_token(bearer.token(), &state.config().jwt_secret)?;

        let user_id: RecordId = claims
            .sub
            .parse()
            .map_err(|_| ApiError::Unauthorized("token invalid".to_string()))?;

        let user = state
            .users()
            .get_user_by_id(&claims.sub)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("token user no longer exists".to_string()))?;

        tracing::debug!(user_id = %user_id, "Bearer token accepted");

        Ok(Self(Some(TokenUser {
            user_id,
            username: user.username,
        })))
    }
}
